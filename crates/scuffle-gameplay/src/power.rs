//! Per-character unique powers.
//!
//! A power swaps entries of a fighter's [`ActionTable`] once, at
//! construction. Replacements keep the guard conditions and side effects of
//! the base action they stand in for.

use serde::{Deserialize, Serialize};

use crate::assets::PUNCH_SOUND;
use crate::clock::{Millis, Timer};
use crate::context::CombatContext;
use crate::fighter::{
    base_jump, base_take_hit, ActionTable, AttackKind, Fighter, Hit, HitOutcome,
};
use crate::host::FighterBody;

/// Delay before the second impulse of a double jump.
pub const DOUBLE_JUMP_DELAY: Millis = 60;
/// Second impulse of a double jump.
pub const DOUBLE_JUMP_VELOCITY: f32 = -360.0;
/// Shortened punch window.
pub const QUICK_JAB_WINDOW: Millis = 130;
/// Volume of the quick jab's whoosh.
pub const QUICK_JAB_VOLUME: f32 = 2.3;
/// Health restored whenever a regenerating fighter is hit.
pub const REGENERATION_AMOUNT: u32 = 3;

/// Character-specific behaviour override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniquePower {
    /// Jump gets a second, smaller impulse shortly after take-off.
    DoubleJump,
    /// Shorter punch window with a louder sound.
    QuickJab,
    /// Regains a little health before each accepted hit.
    Regeneration,
}

impl UniquePower {
    /// Substitutes this power's actions into `table`.
    pub fn apply(self, table: &mut ActionTable) {
        match self {
            Self::DoubleJump => table.jump = double_jump,
            Self::QuickJab => table.punch = quick_jab,
            Self::Regeneration => table.take_hit = regenerating_take_hit,
        }
    }
}

fn double_jump(fighter: &mut Fighter, body: &mut dyn FighterBody, ctx: &mut CombatContext) {
    if !body.is_grounded() {
        return;
    }
    base_jump(fighter, body, ctx);
    ctx.schedule(Timer::DoubleJump(fighter.side()), DOUBLE_JUMP_DELAY);
}

/// Second impulse of a double jump; does nothing once the body has landed.
pub fn double_jump_boost(body: &mut dyn FighterBody) {
    if !body.is_grounded() {
        body.set_velocity_y(DOUBLE_JUMP_VELOCITY);
    }
}

fn quick_jab(fighter: &mut Fighter, _body: &mut dyn FighterBody, ctx: &mut CombatContext) {
    if fighter.begin_attack(AttackKind::Punch, QUICK_JAB_WINDOW, ctx) {
        ctx.effects.play_sound(PUNCH_SOUND, QUICK_JAB_VOLUME);
    }
}

fn regenerating_take_hit(
    fighter: &mut Fighter,
    body: &mut dyn FighterBody,
    ctx: &mut CombatContext,
    hit: &Hit,
) -> Option<HitOutcome> {
    if fighter.is_invincible() {
        return None;
    }
    fighter.heal(REGENERATION_AMOUNT);
    base_take_hit(fighter, body, ctx, hit)
}
