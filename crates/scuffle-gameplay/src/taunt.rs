//! AI taunts shown in a speech bubble.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{Millis, Scheduler, Timer};
use crate::events::{EffectBus, HostEffect};

/// The AI's taunt line.
pub const TAUNT_LINE: &str = "You're getting schooled!";
/// Minimum time between taunts.
pub const TAUNT_COOLDOWN: Millis = 1550;
/// How long a bubble stays on screen.
pub const TAUNT_LIFETIME: Millis = 1200;
/// Height of the bubble anchor above the fighter's centre.
pub const TAUNT_ELEVATION: f32 = 120.0;

const BUBBLE_MIN_WIDTH: f32 = 80.0;
const BUBBLE_CHAR_WIDTH: f32 = 11.0;
const BUBBLE_HEIGHT: f32 = 40.0;
const BUBBLE_TEXT_INSET: f32 = 11.0;

/// Rounded speech bubble with a tail pointing at `anchor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechBubble {
    /// Bubble text
    pub text: String,
    /// Tip of the tail; the bubble body sits above it
    pub anchor: Vec2,
    /// Body width
    pub width: f32,
    /// Body height
    pub height: f32,
}

impl SpeechBubble {
    /// Sizes a bubble for `text`.
    #[must_use]
    pub fn new(anchor: Vec2, text: &str) -> Self {
        let width = (text.chars().count() as f32 * BUBBLE_CHAR_WIDTH).max(BUBBLE_MIN_WIDTH);
        Self {
            text: text.to_string(),
            anchor,
            width,
            height: BUBBLE_HEIGHT,
        }
    }

    /// Top-centre origin of the text.
    #[must_use]
    pub fn text_origin(&self) -> Vec2 {
        Vec2::new(self.anchor.x, self.anchor.y - self.height + BUBBLE_TEXT_INSET)
    }
}

/// Taunt cooldown and the currently visible bubble.
#[derive(Debug, Clone, Default)]
pub struct Taunts {
    bubble: Option<SpeechBubble>,
    cooldown_until: Millis,
}

impl Taunts {
    /// Creates a taunt tracker that is ready immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cooldown has elapsed.
    #[must_use]
    pub fn is_ready(&self, now: Millis) -> bool {
        self.cooldown_until < now
    }

    /// Visible bubble, if any.
    #[must_use]
    pub fn bubble(&self) -> Option<&SpeechBubble> {
        self.bubble.as_ref()
    }

    /// Shows a bubble above `speaker`, replacing any visible one, and starts
    /// the cooldown.
    pub fn show(
        &mut self,
        speaker: Vec2,
        text: &str,
        now: Millis,
        scheduler: &mut Scheduler,
        effects: &EffectBus,
    ) {
        let bubble = SpeechBubble::new(speaker - Vec2::new(0.0, TAUNT_ELEVATION), text);
        debug!(text, "taunt");
        effects.publish(HostEffect::ShowSpeechBubble(bubble.clone()));
        self.bubble = Some(bubble);
        self.cooldown_until = now + TAUNT_COOLDOWN;
        scheduler.schedule(Timer::TauntExpiry, now, TAUNT_LIFETIME);
    }

    /// Removes the visible bubble.
    pub fn expire(&mut self, effects: &EffectBus) {
        if self.bubble.take().is_some() {
            effects.publish(HostEffect::ClearSpeechBubble);
        }
    }
}
