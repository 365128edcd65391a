//! Host effect bus.
//!
//! Gameplay never plays audio or draws anything itself. It publishes
//! [`HostEffect`]s and the host engine drains and performs them once per
//! frame.

use std::cell::Cell;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::clock::Millis;
use crate::taunt::SpeechBubble;

/// Transient image spawned at a hit location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decal {
    /// Impact spark
    Spark,
    /// Blood splash
    Blood,
}

impl Decal {
    /// Texture key registered in the asset manifest.
    #[must_use]
    pub fn texture_key(self) -> &'static str {
        match self {
            Self::Spark => "spark",
            Self::Blood => "blood",
        }
    }
}

/// Side effects requested from the host engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEffect {
    /// Play a sound
    PlaySound {
        /// Audio asset key
        key: String,
        /// Playback volume
        volume: f32,
        /// Loop until stopped
        looped: bool,
    },
    /// Shake the main camera
    CameraShake {
        /// Shake duration
        duration: Millis,
        /// Shake intensity
        intensity: f32,
    },
    /// Show a decal that the host removes after `lifetime`
    SpawnDecal {
        /// Decal type
        decal: Decal,
        /// World position
        position: Vec2,
        /// Uniform scale
        scale: f32,
        /// Time until removal
        lifetime: Millis,
    },
    /// Show (or replace) the taunt speech bubble
    ShowSpeechBubble(SpeechBubble),
    /// Remove the taunt speech bubble
    ClearSpeechBubble,
    /// Replace the combo display text (empty clears it)
    ComboText(String),
    /// Show the static end-of-round message
    ShowBanner {
        /// Message text
        text: String,
        /// Screen position of the message centre
        position: Vec2,
    },
}

/// Bounded channel carrying host effects out of the gameplay layer.
#[derive(Debug)]
pub struct EffectBus {
    sender: Sender<HostEffect>,
    receiver: Receiver<HostEffect>,
    dropped: Cell<usize>,
}

impl Default for EffectBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl EffectBus {
    /// Creates a new effect bus with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            dropped: Cell::new(0),
        }
    }

    /// Publishes an effect. A full bus drops the effect and logs a warning.
    pub fn publish(&self, effect: HostEffect) {
        match self.sender.try_send(effect) {
            Ok(()) => {},
            Err(TrySendError::Full(effect) | TrySendError::Disconnected(effect)) => {
                self.dropped.set(self.dropped.get() + 1);
                warn!(?effect, dropped = self.dropped.get(), "effect bus full, effect dropped");
            },
        }
    }

    /// Convenience for [`HostEffect::PlaySound`] one-shots.
    pub fn play_sound(&self, key: &str, volume: f32) {
        self.publish(HostEffect::PlaySound {
            key: key.to_string(),
            volume,
            looped: false,
        });
    }

    /// Drains all pending effects.
    pub fn drain(&self) -> Vec<HostEffect> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of pending effects.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Number of effects dropped because the bus was full.
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_bus_drain() {
        let bus = EffectBus::new(8);
        bus.play_sound("punch", 1.5);
        bus.publish(HostEffect::ClearSpeechBubble);

        assert_eq!(bus.pending_count(), 2);
        let drained = bus.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1], HostEffect::ClearSpeechBubble);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_full_bus_drops_effects() {
        let bus = EffectBus::new(1);
        bus.publish(HostEffect::ClearSpeechBubble);
        bus.publish(HostEffect::ComboText(String::new()));

        assert_eq!(bus.drain(), vec![HostEffect::ClearSpeechBubble]);
        assert_eq!(bus.dropped_count(), 1);
    }

    #[test]
    fn test_undrained_host_loses_banner() {
        let bus = EffectBus::new(4);
        for _ in 0..4 {
            bus.play_sound("punch", 1.5);
        }
        bus.publish(HostEffect::ShowBanner {
            text: "Elon Wins!".to_string(),
            position: Vec2::new(480.0, 270.0),
        });

        assert_eq!(bus.dropped_count(), 1);
        assert!(!bus
            .drain()
            .iter()
            .any(|e| matches!(e, HostEffect::ShowBanner { .. })));

        // draining frees room again
        bus.publish(HostEffect::ClearSpeechBubble);
        assert_eq!(bus.pending_count(), 1);
        assert_eq!(bus.dropped_count(), 1);
    }
}
