//! # Scuffle Gameplay
//!
//! Gameplay core of a one-on-one 2D fighting game.
//!
//! This crate holds everything that is not rendering, physics or audio:
//! - Game clock and deferred timers
//! - Host engine traits and the host effect bus
//! - Keyboard mapping and dash gesture detection
//! - Character roster and unique powers
//! - Fighter state machine and hit handling
//! - Combo counter and taunts
//! - AI opponent
//! - HUD model and asset manifest
//! - Match controller
//! - A headless kinematic arena implementing the host traits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod ai;
pub mod arena;
pub mod assets;
pub mod clock;
pub mod combo;
pub mod context;
pub mod events;
pub mod fighter;
pub mod host;
pub mod hud;
pub mod input;
pub mod power;
pub mod roster;
pub mod scene;
pub mod taunt;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::ai::*;
    pub use crate::arena::*;
    pub use crate::assets::*;
    pub use crate::clock::*;
    pub use crate::combo::*;
    pub use crate::context::*;
    pub use crate::events::*;
    pub use crate::fighter::*;
    pub use crate::host::*;
    pub use crate::hud::*;
    pub use crate::input::*;
    pub use crate::power::*;
    pub use crate::roster::*;
    pub use crate::scene::*;
    pub use crate::taunt::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use scuffle_common::Side;

    #[test]
    fn test_headless_round_runs() {
        let roster = Roster::standard();
        let mut arena = KinematicArena::new(960.0, 540.0);
        Match::preload(&mut arena, &roster);
        let mut game = Match::create(
            &mut arena,
            &roster,
            &MatchSetup::default(),
            fastrand::Rng::with_seed(11),
        );

        for _ in 0..600 {
            arena.step(16.0);
            game.update(&mut arena, 16.0);
            for effect in game.drain_effects() {
                arena.apply_effect(&effect);
            }
            arena.keyboard_mut().end_frame();
        }

        for side in Side::BOTH {
            let fighter = game.fighter(side);
            assert!(fighter.health() <= MAX_HEALTH);
            assert!(fighter.super_meter() <= MAX_SUPER_METER);
        }
        assert!(arena.is_sound_playing(MUSIC));
    }

    #[test]
    fn test_roster_powers_reach_fighters() {
        let roster = Roster::standard();
        let mut arena = KinematicArena::new(960.0, 540.0);
        let setup = MatchSetup::from_json(r#"{"selected":"trump"}"#).unwrap_or_default();
        let game = Match::create(&mut arena, &roster, &setup, fastrand::Rng::with_seed(2));
        assert_eq!(
            game.fighter(Side::Human).character().power,
            Some(UniquePower::QuickJab)
        );
    }
}
