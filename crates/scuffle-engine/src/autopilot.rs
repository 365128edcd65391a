//! Keyboard autopilot for the human side.
//!
//! Runs the AI decision rules from the human fighter's point of view and
//! turns the result into key presses, so a headless run exercises the same
//! input path as a player.

use scuffle_common::Side;
use scuffle_gameplay::ai::{self, AiObservation};
use scuffle_gameplay::fighter::{AttackKind, MAX_SUPER_METER};
use scuffle_gameplay::host::{FighterBody, Host};
use scuffle_gameplay::input::{Action, KeyCode};
use scuffle_gameplay::scene::Match;

/// Edge-triggered actions, in the order they are planned.
const TRIGGERS: [Action; 4] = [Action::Jump, Action::Punch, Action::Kick, Action::Super];

/// Synthetic player.
#[derive(Debug)]
pub struct Autopilot {
    difficulty: u32,
    rng: fastrand::Rng,
    held: [bool; TRIGGERS.len()],
}

impl Autopilot {
    /// Creates an autopilot playing at `difficulty`.
    #[must_use]
    pub fn new(difficulty: u32, rng: fastrand::Rng) -> Self {
        Self {
            difficulty,
            rng,
            held: [false; TRIGGERS.len()],
        }
    }

    /// Key states for the next frame.
    ///
    /// An action planned on two frames in a row releases its key on the
    /// second one, since a held key only triggers once.
    pub fn plan<H: Host>(&mut self, game: &Match, host: &H) -> Vec<(KeyCode, bool)> {
        let body = host.body(Side::Human);
        let fighter = game.fighter(Side::Human);
        let obs = AiObservation {
            position: body.position(),
            opponent: host.body(Side::Ai).position(),
            grounded: body.is_grounded(),
            is_attacking: fighter.is_attacking(),
            now: game.now(),
            taunt_ready: false,
        };
        let decision = ai::decide(&obs, self.difficulty, &mut self.rng);

        let bindings = host.keyboard().bindings();
        let mut keys = vec![
            (bindings.get(Action::MoveLeft).primary, decision.velocity_x < 0.0),
            (bindings.get(Action::MoveRight).primary, decision.velocity_x > 0.0),
        ];

        let wanted = [
            decision.jump,
            decision.attack == Some(AttackKind::Punch),
            decision.attack == Some(AttackKind::Kick),
            fighter.super_meter() >= MAX_SUPER_METER && !fighter.is_attacking(),
        ];
        for ((action, held), want) in TRIGGERS.iter().zip(&mut self.held).zip(wanted) {
            let press = want && !*held;
            *held = press;
            keys.push((bindings.get(*action).primary, press));
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scuffle_gameplay::arena::KinematicArena;
    use scuffle_gameplay::roster::Roster;
    use scuffle_gameplay::scene::MatchSetup;

    fn setup(human_x: f32, ai_x: f32) -> (KinematicArena, Match) {
        let mut arena = KinematicArena::new(960.0, 540.0);
        let game = Match::create(
            &mut arena,
            &Roster::standard(),
            &MatchSetup::default(),
            fastrand::Rng::with_seed(5),
        );
        arena.place_on_ground(Side::Human, human_x);
        arena.place_on_ground(Side::Ai, ai_x);
        (arena, game)
    }

    fn pressed(keys: &[(KeyCode, bool)], key: KeyCode) -> bool {
        keys.iter().any(|&(k, p)| k == key && p)
    }

    #[test]
    fn test_walks_toward_opponent() {
        let (arena, game) = setup(200.0, 700.0);
        let mut pilot = Autopilot::new(3, fastrand::Rng::with_seed(1));
        let keys = pilot.plan(&game, &arena);
        assert!(pressed(&keys, KeyCode::D));
        assert!(!pressed(&keys, KeyCode::A));
    }

    #[test]
    fn test_attack_keys_alternate() {
        let (arena, game) = setup(400.0, 460.0);
        let mut pilot = Autopilot::new(3, fastrand::Rng::with_seed(9));

        // in reach: every frame plans a punch or a kick, never the same key twice running
        let mut last = (false, false);
        for _ in 0..20 {
            let keys = pilot.plan(&game, &arena);
            let now = (pressed(&keys, KeyCode::Space), pressed(&keys, KeyCode::S));
            assert!(!(now.0 && last.0));
            assert!(!(now.1 && last.1));
            last = now;
        }
    }

    #[test]
    fn test_super_when_meter_full() {
        let (arena, mut game) = setup(200.0, 700.0);
        let mut pilot = Autopilot::new(3, fastrand::Rng::with_seed(1));
        assert!(!pressed(&pilot.plan(&game, &arena), KeyCode::Enter));

        game.fighter_mut(Side::Human).gain_meter(MAX_SUPER_METER);
        assert!(pressed(&pilot.plan(&game, &arena), KeyCode::Enter));
    }
}
