//! AI opponent controller.
//!
//! The controller is a pure per-frame decision function. The only state an
//! AI fighter carries between frames is the taunt cooldown, which lives in
//! [`Taunts`](crate::taunt::Taunts).
//!
//! Rules, in evaluation order:
//! 1. Far away: walk toward the opponent.
//! 2. Close: sometimes back off (feint).
//! 3. Otherwise stand still.
//! 4. Near and grounded: sometimes jump.
//! 5. In reach and not swinging: punch or kick.
//! 6. Cooldown elapsed: sometimes taunt.
//!
//! Random draws short-circuit in the same order, so a scripted random
//! source reproduces a decision exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::fighter::AttackKind;

/// Difficulty used when none (or zero) is configured.
pub const DEFAULT_DIFFICULTY: u32 = 3;

/// Base walk speed.
pub const BASE_SPEED: f32 = 110.0;
/// Walk speed added per difficulty level.
pub const SPEED_PER_LEVEL: f32 = 25.0;
/// Upper bound of the random speed jitter.
pub const SPEED_JITTER: f32 = 20.0;
/// Base aggression.
pub const BASE_AGGRESSION: f32 = 0.4;
/// Aggression added per difficulty level.
pub const AGGRESSION_PER_LEVEL: f32 = 0.15;

/// Beyond this horizontal distance the AI walks in.
pub const APPROACH_DISTANCE: f32 = 110.0;
/// Within this horizontal distance the AI may back off.
pub const RETREAT_DISTANCE: f32 = 65.0;
/// Retreat chance per unit of aggression.
pub const RETREAT_CHANCE: f32 = 0.31;
/// Retreat speed relative to walk speed.
pub const RETREAT_SPEED_FACTOR: f32 = 0.7;
/// Within this horizontal distance the AI may jump.
pub const JUMP_DISTANCE: f32 = 180.0;
/// Jump chance per unit of aggression.
pub const JUMP_CHANCE: f32 = 0.15;
/// Horizontal attack reach.
pub const ATTACK_REACH_X: f32 = 97.0;
/// Vertical attack reach.
pub const ATTACK_REACH_Y: f32 = 65.0;
/// Taunt chance per eligible frame.
pub const TAUNT_CHANCE: f32 = 0.016;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw.
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for fastrand::Rng {
    fn next_unit(&mut self) -> f32 {
        self.f32()
    }
}

/// Normalises a configured difficulty: zero means the default.
#[must_use]
pub fn effective_difficulty(difficulty: u32) -> u32 {
    if difficulty == 0 {
        DEFAULT_DIFFICULTY
    } else {
        difficulty
    }
}

/// Walk speed for a difficulty and a uniform draw.
#[must_use]
pub fn speed(difficulty: u32, draw: f32) -> f32 {
    BASE_SPEED + SPEED_PER_LEVEL * difficulty as f32 + SPEED_JITTER * draw
}

/// Aggression for a difficulty.
#[must_use]
pub fn aggression(difficulty: u32) -> f32 {
    BASE_AGGRESSION + AGGRESSION_PER_LEVEL * difficulty as f32
}

/// What the AI sees this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiObservation {
    /// AI fighter position
    pub position: Vec2,
    /// Opponent position
    pub opponent: Vec2,
    /// AI body is on the ground
    pub grounded: bool,
    /// AI fighter has a swing active
    pub is_attacking: bool,
    /// Current game time
    pub now: Millis,
    /// Taunt cooldown elapsed
    pub taunt_ready: bool,
}

/// What the AI does this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiDecision {
    /// Walk speed computed for this frame
    pub speed: f32,
    /// Horizontal velocity to apply
    pub velocity_x: f32,
    /// Jump this frame
    pub jump: bool,
    /// Swing to start
    pub attack: Option<AttackKind>,
    /// Show a taunt
    pub taunt: bool,
}

/// Evaluates the decision rules once.
pub fn decide(obs: &AiObservation, difficulty: u32, rng: &mut impl RandomSource) -> AiDecision {
    let difficulty = effective_difficulty(difficulty);
    let speed = speed(difficulty, rng.next_unit());
    let aggression = aggression(difficulty);

    let dx = obs.position.x - obs.opponent.x;
    let distance = dx.abs();
    // toward the opponent is the opposite sign of dx
    let toward = if dx > 0.0 { -1.0 } else { 1.0 };

    let velocity_x = if distance > APPROACH_DISTANCE {
        toward * speed
    } else if distance < RETREAT_DISTANCE && rng.next_unit() < RETREAT_CHANCE * aggression {
        -toward * speed * RETREAT_SPEED_FACTOR
    } else {
        0.0
    };

    let jump =
        obs.grounded && distance < JUMP_DISTANCE && rng.next_unit() < JUMP_CHANCE * aggression;

    // a jump cancels the current swing before the attack check
    let swinging = obs.is_attacking && !jump;
    let attack = if !swinging
        && distance < ATTACK_REACH_X
        && (obs.position.y - obs.opponent.y).abs() < ATTACK_REACH_Y
    {
        if rng.next_unit() < aggression {
            Some(AttackKind::Punch)
        } else {
            Some(AttackKind::Kick)
        }
    } else {
        None
    };

    let taunt = obs.taunt_ready && rng.next_unit() < TAUNT_CHANCE;

    AiDecision {
        speed,
        velocity_x,
        jump,
        attack,
        taunt,
    }
}

#[cfg(test)]
pub(crate) struct ScriptedRandom {
    draws: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: &[f32]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let draw = self.draws.get(self.next).copied().unwrap_or(0.99);
        self.next += 1;
        draw
    }
}
