//! Match clock and deferred one-shot timers.
//!
//! Game time advances by the frame delta multiplied by the current time
//! scale, so slow motion stretches every pending timer the same way the
//! host engine's scene clock does.
//!
//! Each [`Timer`] names a logical slot (an owner plus a purpose). A slot
//! holds at most one pending deadline: scheduling into an occupied slot
//! cancels the stale deadline first.

use ahash::AHashMap;
use scuffle_common::Side;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Game time in milliseconds ("time units").
pub type Millis = u64;

/// Normal playback speed.
pub const NORMAL_TIME_SCALE: f32 = 1.0;

/// Monotonic game clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    /// Elapsed game time, kept fractional so slow motion does not drift.
    elapsed: f64,
    /// Multiplier applied to every frame delta.
    time_scale: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Creates a clock at time zero running at normal speed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            time_scale: NORMAL_TIME_SCALE,
        }
    }

    /// Current game time.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.elapsed.floor() as Millis
    }

    /// Current time scale.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Sets the time scale. Negative values are treated as zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Advances the clock by a real-time delta and returns the new game time.
    pub fn advance(&mut self, delta_ms: f32) -> Millis {
        self.elapsed += f64::from(delta_ms.max(0.0)) * f64::from(self.time_scale);
        self.now()
    }
}

/// A logical timer slot.
///
/// The slot doubles as the task to run when its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timer {
    /// End of a fighter's punch, kick or super window.
    AttackWindow(Side),
    /// End of a fighter's dash.
    DashWindow(Side),
    /// End of a fighter's post-hit invincibility.
    Invincibility(Side),
    /// Second impulse of a double jump.
    DoubleJump(Side),
    /// Idle reset of the shared combo counter.
    ComboReset,
    /// Removal of the taunt speech bubble.
    TauntExpiry,
    /// Restoration of normal speed after hit-stop slow motion.
    SlowMotion,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Millis,
    seq: u64,
}

/// Delayed one-shot task queue keyed by [`Timer`] slot.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: AHashMap<Timer, Pending>,
    next_seq: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `timer` to fire `delay` units after `now`.
    ///
    /// Returns `true` if a pending deadline in the same slot was cancelled.
    pub fn schedule(&mut self, timer: Timer, now: Millis, delay: Millis) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;
        let replaced = self
            .pending
            .insert(
                timer,
                Pending {
                    due: now + delay,
                    seq,
                },
            )
            .is_some();
        trace!(?timer, due = now + delay, replaced, "timer scheduled");
        replaced
    }

    /// Cancels a pending timer. Returns `true` if one was pending.
    pub fn cancel(&mut self, timer: Timer) -> bool {
        self.pending.remove(&timer).is_some()
    }

    /// Checks whether a timer slot is occupied.
    #[must_use]
    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.contains_key(&timer)
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn due(&self, timer: Timer) -> Option<Millis> {
        self.pending.get(&timer).map(|p| p.due)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Checks whether no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// ordered by deadline and then by scheduling order.
    pub fn drain_due(&mut self, now: Millis) -> Vec<Timer> {
        let mut due: Vec<(Timer, Pending)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= now)
            .map(|(t, p)| (*t, *p))
            .collect();
        due.sort_by_key(|(_, p)| (p.due, p.seq));
        for (timer, _) in &due {
            self.pending.remove(timer);
            trace!(?timer, now, "timer fired");
        }
        due.into_iter().map(|(t, _)| t).collect()
    }
}
