//! Match-owned services handed to fighter actions.

use crate::clock::{Clock, Millis, Scheduler, Timer};
use crate::combo::ComboCounter;
use crate::events::EffectBus;

/// Clock, timers, effect bus and combo counter of one match.
///
/// Owned by the match and passed down to fighters by reference so that
/// fighters never reach back up into the match.
#[derive(Debug, Default)]
pub struct CombatContext {
    /// Game clock
    pub clock: Clock,
    /// Deferred one-shot timers
    pub scheduler: Scheduler,
    /// Outgoing host effects
    pub effects: EffectBus,
    /// Shared combo counter
    pub combo: ComboCounter,
}

impl CombatContext {
    /// Creates a context at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current game time.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    /// Schedules a timer relative to now, replacing any pending one in the slot.
    pub fn schedule(&mut self, timer: Timer, delay: Millis) -> bool {
        let now = self.clock.now();
        self.scheduler.schedule(timer, now, delay)
    }

    /// Counts a landed hit on the shared combo counter.
    pub fn register_combo_hit(&mut self) {
        let now = self.clock.now();
        self.combo.increment(now, &mut self.scheduler, &self.effects);
    }

    /// Clears the combo counter.
    pub fn reset_combo(&mut self) {
        self.combo.reset(&mut self.scheduler, &self.effects);
    }
}
