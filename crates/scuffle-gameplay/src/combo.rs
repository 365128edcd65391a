//! Shared combo counter.

use crate::clock::{Millis, Scheduler, Timer};
use crate::events::{EffectBus, HostEffect};

/// Idle time after the last landed hit before the combo resets.
pub const COMBO_RESET_DELAY: Millis = 880;

/// Counts consecutive landed hits by either fighter.
#[derive(Debug, Clone, Default)]
pub struct ComboCounter {
    count: u32,
    text: String,
}

impl ComboCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hit count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Current display text (empty when no combo is running).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Registers a landed hit and restarts the idle-reset window.
    pub fn increment(&mut self, now: Millis, scheduler: &mut Scheduler, effects: &EffectBus) {
        self.count += 1;
        self.text = format!("{} HIT COMBO!", self.count);
        effects.publish(HostEffect::ComboText(self.text.clone()));
        scheduler.schedule(Timer::ComboReset, now, COMBO_RESET_DELAY);
    }

    /// Clears the combo immediately.
    pub fn reset(&mut self, scheduler: &mut Scheduler, effects: &EffectBus) {
        scheduler.cancel(Timer::ComboReset);
        self.clear(effects);
    }

    /// Handles the idle-reset timer.
    pub fn expire(&mut self, effects: &EffectBus) {
        self.clear(effects);
    }

    fn clear(&mut self, effects: &EffectBus) {
        if self.count == 0 && self.text.is_empty() {
            return;
        }
        self.count = 0;
        self.text.clear();
        effects.publish(HostEffect::ComboText(String::new()));
    }
}
