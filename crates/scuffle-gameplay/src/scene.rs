//! Match controller.
//!
//! Owns both fighters and every match-wide service, and drives one round
//! from setup to the victory banner:
//!
//! ```text
//! create() ──> Active ──(a fighter reaches 0 health)──> Ended { winner }
//! ```
//!
//! Each [`Match::update`] runs the frame in a fixed order: clock and due
//! timers, human input, AI, hit resolution in both directions, combo reset,
//! attack boxes, HUD.

use glam::Vec2;
use scuffle_common::{SetupError, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{self, AiObservation, DEFAULT_DIFFICULTY};
use crate::assets::{self, MUSIC};
use crate::clock::{Millis, Timer, NORMAL_TIME_SCALE};
use crate::combo::ComboCounter;
use crate::context::CombatContext;
use crate::events::{EffectBus, HostEffect};
use crate::fighter::{AttackKind, Fighter, Hit, MAX_SUPER_METER};
use crate::host::{FighterBody, Host};
use crate::hud::Hud;
use crate::input::{DashDetector, FrameInput};
use crate::power;
use crate::roster::Roster;
use crate::taunt::{Taunts, TAUNT_LINE};

/// Character picked when the setup payload names none.
pub const DEFAULT_CHARACTER: &str = "elon";
/// Human walk speed.
pub const WALK_SPEED: f32 = 160.0;
/// Background music volume.
pub const MUSIC_VOLUME: f32 = 0.35;
/// Spawn points as fractions of the viewport.
pub const HUMAN_SPAWN: Vec2 = Vec2::new(0.22, 0.68);
/// Spawn point of the AI fighter.
pub const AI_SPAWN: Vec2 = Vec2::new(0.77, 0.68);

/// Damage dealt by a landed hit before bonuses.
#[must_use]
pub fn base_damage(attacker: Side) -> u32 {
    match attacker {
        Side::Human => 10,
        Side::Ai => 8,
    }
}

/// Super meter granted to the attacker for a landed hit.
#[must_use]
pub fn meter_gain(attacker: Side) -> u32 {
    match attacker {
        Side::Human => 9,
        Side::Ai => 8,
    }
}

/// Match setup request, usually handed over by a character select screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSetup {
    /// Human character key
    pub selected: String,
    /// AI difficulty (0 means default)
    pub difficulty: u32,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            selected: DEFAULT_CHARACTER.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl MatchSetup {
    /// Parses a JSON payload; missing fields take their defaults.
    pub fn from_json(payload: &str) -> Result<Self, SetupError> {
        serde_json::from_str(payload).map_err(|e| SetupError::InvalidPayload(e.to_string()))
    }
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Fighters are in play
    Active,
    /// A fighter reached zero health
    Ended {
        /// Side left standing
        winner: Side,
    },
}

/// One round between the human and the AI.
#[derive(Debug)]
pub struct Match {
    phase: MatchPhase,
    fighters: [Fighter; 2],
    ctx: CombatContext,
    hud: Hud,
    taunts: Taunts,
    dash: DashDetector,
    difficulty: u32,
    ai_enabled: bool,
    rng: fastrand::Rng,
    banner: Option<String>,
}

impl Match {
    /// Declares every asset the match needs to the host loader.
    pub fn preload<H: Host>(host: &mut H, roster: &Roster) {
        let entries = assets::manifest(roster);
        for entry in &entries {
            host.declare_asset(entry);
        }
        debug!(count = entries.len(), "assets declared");
    }

    /// Sets up a round: picks the AI character, spawns both bodies, lays out
    /// the HUD and starts the music if it is not already playing.
    pub fn create<H: Host>(
        host: &mut H,
        roster: &Roster,
        setup: &MatchSetup,
        mut rng: fastrand::Rng,
    ) -> Self {
        let viewport = host.viewport();
        let human = roster.resolve(&setup.selected);
        let opponents = roster.opponents_of(&human.key);
        // a roster with a single character falls back to a mirror match
        let ai = if opponents.is_empty() {
            human.clone()
        } else {
            opponents[rng.usize(..opponents.len())].clone()
        };
        info!(human = %human.key, ai = %ai.key, difficulty = setup.difficulty, "match setup");

        host.spawn_body(
            Side::Human,
            (viewport * HUMAN_SPAWN).round(),
            Vec2::splat(human.base_scale()),
        );
        host.spawn_body(
            Side::Ai,
            (viewport * AI_SPAWN).round(),
            Vec2::splat(ai.base_scale()),
        );

        let ctx = CombatContext::new();
        if !host.is_sound_playing(MUSIC) {
            ctx.effects.publish(HostEffect::PlaySound {
                key: MUSIC.to_string(),
                volume: MUSIC_VOLUME,
                looped: true,
            });
        }

        let hud = Hud::new(viewport.x, &human.display_name, &ai.display_name);
        let mut fighters = [
            Fighter::new(Side::Human, human, false),
            Fighter::new(Side::Ai, ai, true),
        ];
        for side in Side::BOTH {
            fighters[side.index()].update_attack_box(host.body(side));
        }

        Self {
            phase: MatchPhase::Active,
            fighters,
            ctx,
            hud,
            taunts: Taunts::new(),
            dash: DashDetector::new(),
            difficulty: setup.difficulty,
            ai_enabled: true,
            rng,
            banner: None,
        }
    }

    /// Runs one frame. Does nothing once the round has ended.
    pub fn update<H: Host>(&mut self, host: &mut H, delta_ms: f32) {
        if self.is_over() {
            return;
        }
        let now = self.ctx.clock.advance(delta_ms);
        self.run_timers(host, now);

        let input = host.keyboard().frame_input();
        self.apply_input(host, &input, now);

        if self.ai_enabled && !host.is_physics_paused() {
            self.drive_ai(host, now);
        }

        for attacker in Side::BOTH {
            if self.resolve_hit(host, attacker) {
                break;
            }
        }

        if !self.fighters.iter().any(Fighter::is_attacking) {
            self.ctx.reset_combo();
        }
        for side in Side::BOTH {
            self.fighters[side.index()].update_attack_box(host.body(side));
        }
        self.hud.sync(
            self.fighters[Side::Human.index()].health(),
            self.fighters[Side::Ai.index()].health(),
        );
    }

    fn run_timers<H: Host>(&mut self, host: &mut H, now: Millis) {
        for timer in self.ctx.scheduler.drain_due(now) {
            match timer {
                Timer::AttackWindow(side) => self.fighters[side.index()].end_attack(),
                Timer::DashWindow(side) => self.fighters[side.index()].end_dash(host.body_mut(side)),
                Timer::Invincibility(side) => self.fighters[side.index()].clear_invincibility(),
                Timer::DoubleJump(side) => power::double_jump_boost(host.body_mut(side)),
                Timer::ComboReset => self.ctx.combo.expire(&self.ctx.effects),
                Timer::TauntExpiry => self.taunts.expire(&self.ctx.effects),
                Timer::SlowMotion => self.ctx.clock.set_time_scale(NORMAL_TIME_SCALE),
            }
        }
    }

    fn apply_input<H: Host>(&mut self, host: &mut H, input: &FrameInput, now: Millis) {
        let fighter = &mut self.fighters[Side::Human.index()];
        let body = host.body_mut(Side::Human);

        if input.left_pressed && self.dash.register(-1, now) {
            fighter.dash(-1.0, body, &mut self.ctx);
        }
        if input.right_pressed && self.dash.register(1, now) {
            fighter.dash(1.0, body, &mut self.ctx);
        }

        if !fighter.is_dashing() {
            body.set_velocity_x(0.0);
            // right wins when both directions are held
            if input.left_held {
                body.set_velocity_x(-WALK_SPEED);
            }
            if input.right_held {
                body.set_velocity_x(WALK_SPEED);
            }
        }

        if input.jump {
            fighter.jump(body, &mut self.ctx);
        }
        if input.punch {
            fighter.punch(body, &mut self.ctx);
        }
        if input.kick {
            fighter.kick(body, &mut self.ctx);
        }
        if input.super_move && fighter.super_meter() >= MAX_SUPER_METER {
            fighter.super_move(&mut self.ctx);
        }
    }

    fn drive_ai<H: Host>(&mut self, host: &mut H, now: Millis) {
        let opponent = host.body(Side::Human).position();
        let body = host.body_mut(Side::Ai);
        let fighter = &mut self.fighters[Side::Ai.index()];
        let obs = AiObservation {
            position: body.position(),
            opponent,
            grounded: body.is_grounded(),
            is_attacking: fighter.is_attacking(),
            now,
            taunt_ready: self.taunts.is_ready(now),
        };
        let decision = ai::decide(&obs, self.difficulty, &mut self.rng);

        body.set_velocity_x(decision.velocity_x);
        if decision.jump {
            fighter.jump(body, &mut self.ctx);
        }
        match decision.attack {
            Some(AttackKind::Punch) => fighter.punch(body, &mut self.ctx),
            Some(AttackKind::Kick) => fighter.kick(body, &mut self.ctx),
            Some(AttackKind::Super) | None => {}
        }
        if decision.taunt {
            self.taunts.show(
                obs.position,
                TAUNT_LINE,
                now,
                &mut self.ctx.scheduler,
                &self.ctx.effects,
            );
        }
    }

    /// Tests `attacker`'s swing against the defender. Returns `true` when
    /// the hit ended the round.
    fn resolve_hit<H: Host>(&mut self, host: &mut H, attacker: Side) -> bool {
        let defender = attacker.opponent();
        let area = self.fighters[attacker.index()].attack_box();
        if !host.overlaps_body(&area, defender) {
            return false;
        }
        let striker = &mut self.fighters[attacker.index()];
        let super_attack = striker.current_attack() == Some(AttackKind::Super);
        if !striker.latch_hit() {
            return false;
        }

        let body = host.body_mut(defender);
        let hit = Hit {
            attacker,
            base_damage: base_damage(attacker),
            position: body.position(),
            juggle: !body.is_grounded(),
            super_attack,
        };
        let outcome = self.fighters[defender.index()].take_hit(body, &mut self.ctx, &hit);
        if outcome.is_some() {
            self.fighters[attacker.index()].gain_meter(meter_gain(attacker));
        }

        if self.fighters[defender.index()].health() == 0 {
            self.end_round(host, attacker);
            return true;
        }
        false
    }

    fn end_round<H: Host>(&mut self, host: &mut H, winner: Side) {
        host.pause_physics();
        let text = format!("{} Wins!", self.fighters[winner.index()].character().display_name);
        self.ctx.effects.publish(HostEffect::ShowBanner {
            text: text.clone(),
            position: host.viewport() * 0.5,
        });
        info!(%winner, now = self.ctx.now(), "{text}");
        self.banner = Some(text);
        self.phase = MatchPhase::Ended { winner };
    }

    /// Turns the AI controller on or off (off leaves the AI fighter idle).
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Whether the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Ended { .. })
    }

    /// Winning side, once the round has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Ended { winner } => Some(winner),
            MatchPhase::Active => None,
        }
    }

    /// Fighter of a side.
    #[must_use]
    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    /// Mutable fighter of a side.
    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    /// HUD model.
    #[must_use]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Shared combo counter.
    #[must_use]
    pub fn combo(&self) -> &ComboCounter {
        &self.ctx.combo
    }

    /// Taunt state.
    #[must_use]
    pub fn taunts(&self) -> &Taunts {
        &self.taunts
    }

    /// Current game time.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.ctx.now()
    }

    /// Current time scale.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.ctx.clock.time_scale()
    }

    /// AI difficulty as requested at setup.
    #[must_use]
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Outgoing host effects.
    #[must_use]
    pub fn effects(&self) -> &EffectBus {
        &self.ctx.effects
    }

    /// Takes every pending host effect.
    pub fn drain_effects(&self) -> Vec<HostEffect> {
        self.ctx.effects.drain()
    }

    /// Victory banner text, once the round has ended.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::KinematicArena;
    use crate::input::KeyCode;

    const FRAME: f32 = 16.0;

    fn arena() -> KinematicArena {
        KinematicArena::new(960.0, 540.0)
    }

    /// A match with the fighters standing next to each other and the AI idle.
    ///
    /// The human plays the regenerating character so the AI opponent takes
    /// plain damage.
    fn close_quarters(arena: &mut KinematicArena) -> Match {
        close_quarters_as(arena, "pelosi")
    }

    fn close_quarters_as(arena: &mut KinematicArena, selected: &str) -> Match {
        let setup = MatchSetup {
            selected: selected.to_string(),
            difficulty: 3,
        };
        let mut game = Match::create(arena, &Roster::standard(), &setup, fastrand::Rng::with_seed(7));
        game.set_ai_enabled(false);
        arena.place_on_ground(Side::Human, 400.0);
        arena.place_on_ground(Side::Ai, 470.0);
        game.update(arena, FRAME);
        game
    }

    fn frame(game: &mut Match, arena: &mut KinematicArena, keys: &[KeyCode], delta: f32) {
        for &key in keys {
            arena.keyboard_mut().update_key(key, true);
        }
        game.update(arena, delta);
        arena.keyboard_mut().end_frame();
        for &key in keys {
            arena.keyboard_mut().update_key(key, false);
        }
    }

    fn idle(game: &mut Match, arena: &mut KinematicArena, frames: usize) {
        for _ in 0..frames {
            frame(game, arena, &[], FRAME);
        }
    }

    #[test]
    fn test_setup_payload_defaults() {
        let setup = MatchSetup::from_json("{}").expect("empty payload");
        assert_eq!(setup, MatchSetup::default());

        let setup = MatchSetup::from_json(r#"{"selected":"trump","difficulty":5}"#).expect("full payload");
        assert_eq!(setup.selected, "trump");
        assert_eq!(setup.difficulty, 5);

        assert!(MatchSetup::from_json("not json").is_err());
    }

    #[test]
    fn test_preload_declares_manifest() {
        let mut arena = arena();
        Match::preload(&mut arena, &Roster::standard());
        assert_eq!(arena.assets().len(), 14);
    }

    #[test]
    fn test_ai_never_mirrors_selection() {
        let roster = Roster::standard();
        for seed in 0..32 {
            let mut arena = arena();
            let game = Match::create(
                &mut arena,
                &roster,
                &MatchSetup::default(),
                fastrand::Rng::with_seed(seed),
            );
            assert_eq!(game.fighter(Side::Human).character().key, "elon");
            assert_ne!(game.fighter(Side::Ai).character().key, "elon");
        }
    }

    #[test]
    fn test_spawn_layout() {
        let mut arena = arena();
        let game = Match::create(
            &mut arena,
            &Roster::standard(),
            &MatchSetup::default(),
            fastrand::Rng::with_seed(1),
        );
        assert_eq!(arena.body(Side::Human).position(), Vec2::new(211.0, 367.0));
        assert_eq!(arena.body(Side::Ai).position(), Vec2::new(739.0, 367.0));
        assert!(game.fighter(Side::Ai).facing_left());
        assert!(!game.fighter(Side::Human).facing_left());
        assert_eq!(game.phase(), MatchPhase::Active);
    }

    #[test]
    fn test_unknown_character_uses_fallback() {
        let mut arena = arena();
        let setup = MatchSetup {
            selected: "ghost".to_string(),
            difficulty: 0,
        };
        let game = Match::create(&mut arena, &Roster::standard(), &setup, fastrand::Rng::with_seed(3));
        let human = game.fighter(Side::Human).character();
        assert_eq!(human.key, "ghost");
        assert_eq!(human.base_scale(), 0.36);
        assert!(human.power.is_none());
    }

    #[test]
    fn test_music_started_once() {
        let mut arena = arena();
        let roster = Roster::standard();
        let first = Match::create(&mut arena, &roster, &MatchSetup::default(), fastrand::Rng::new());
        for effect in first.drain_effects() {
            arena.apply_effect(&effect);
        }
        assert!(arena.is_sound_playing(MUSIC));

        let second = Match::create(&mut arena, &roster, &MatchSetup::default(), fastrand::Rng::new());
        let restarted = second
            .drain_effects()
            .iter()
            .any(|e| matches!(e, HostEffect::PlaySound { key, .. } if key == MUSIC));
        assert!(!restarted);
    }

    #[test]
    fn test_one_hit_per_swing() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        frame(&mut game, &mut arena, &[KeyCode::Space], FRAME);
        assert!(game.fighter(Side::Human).is_attacking());
        assert_eq!(game.fighter(Side::Ai).health(), 90);

        // still overlapping for the rest of the swing
        idle(&mut game, &mut arena, 60);
        assert_eq!(game.fighter(Side::Ai).health(), 90);
        assert_eq!(game.fighter(Side::Human).super_meter(), 9);
        assert!(!game.fighter(Side::Human).is_attacking());
    }

    #[test]
    fn test_hit_slow_motion_restores() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        frame(&mut game, &mut arena, &[KeyCode::Space], FRAME);
        assert_eq!(game.time_scale(), 0.13);
        idle(&mut game, &mut arena, 40);
        assert_eq!(game.time_scale(), 1.0);
    }

    #[test]
    fn test_combo_resets_when_idle() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        frame(&mut game, &mut arena, &[KeyCode::Space], FRAME);
        assert_eq!(game.combo().count(), 1);
        assert_eq!(game.combo().text(), "1 HIT COMBO!");

        // swing over, nobody attacking
        idle(&mut game, &mut arena, 60);
        assert_eq!(game.combo().count(), 0);
        assert!(game.combo().text().is_empty());
    }

    #[test]
    fn test_ten_hits_end_the_round() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        for _ in 0..10 {
            frame(&mut game, &mut arena, &[KeyCode::Space], FRAME);
            idle(&mut game, &mut arena, 80);
        }

        assert_eq!(game.fighter(Side::Ai).health(), 0);
        assert_eq!(game.winner(), Some(Side::Human));
        assert_eq!(game.banner(), Some("Pelosi Wins!"));
        assert!(arena.is_physics_paused());
        assert_eq!(game.hud().bar(Side::Ai).width, 6.0);

        let banners = game
            .drain_effects()
            .into_iter()
            .filter(|e| matches!(e, HostEffect::ShowBanner { .. }))
            .count();
        assert_eq!(banners, 1);
    }

    #[test]
    fn test_ended_round_is_frozen() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);
        for _ in 0..10 {
            frame(&mut game, &mut arena, &[KeyCode::Space], FRAME);
            idle(&mut game, &mut arena, 80);
        }
        assert!(game.is_over());
        game.drain_effects();

        let now = game.now();
        let human = game.fighter(Side::Human).clone();
        frame(&mut game, &mut arena, &[KeyCode::Space, KeyCode::S], FRAME);
        idle(&mut game, &mut arena, 30);

        assert_eq!(game.now(), now);
        assert_eq!(game.fighter(Side::Human).health(), human.health());
        assert_eq!(game.fighter(Side::Human).is_attacking(), human.is_attacking());
        assert_eq!(game.drain_effects().len(), 0);
        assert_eq!(game.winner(), Some(Side::Human));
    }

    #[test]
    fn test_double_tap_dash() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        frame(&mut game, &mut arena, &[KeyCode::D], FRAME);
        assert!(!game.fighter(Side::Human).is_dashing());
        assert_eq!(arena.body(Side::Human).velocity().x, WALK_SPEED);

        frame(&mut game, &mut arena, &[KeyCode::D], 249.0);
        assert!(game.fighter(Side::Human).is_dashing());
        assert!(game.fighter(Side::Human).is_invincible());
        assert_eq!(arena.body(Side::Human).velocity().x, 400.0);
    }

    #[test]
    fn test_slow_double_tap_walks() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        frame(&mut game, &mut arena, &[KeyCode::A], FRAME);
        frame(&mut game, &mut arena, &[KeyCode::A], 251.0);
        assert!(!game.fighter(Side::Human).is_dashing());
        assert_eq!(arena.body(Side::Human).velocity().x, -WALK_SPEED);
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);
        arena.place_on_ground(Side::Ai, 850.0);

        frame(&mut game, &mut arena, &[KeyCode::A, KeyCode::D], FRAME);
        assert!(!game.fighter(Side::Human).is_dashing());
        assert_eq!(arena.body(Side::Human).velocity().x, WALK_SPEED);
    }

    #[test]
    fn test_ai_hit_damage_and_meter() {
        let mut arena = arena();
        // a non-regenerating human takes plain damage
        let mut game = close_quarters_as(&mut arena, "elon");
        game.set_ai_enabled(true);

        // in reach, the AI always starts a swing and it lands this frame
        frame(&mut game, &mut arena, &[], FRAME);
        assert!(game.fighter(Side::Ai).is_attacking());
        assert_eq!(game.fighter(Side::Human).health(), 100 - base_damage(Side::Ai));
        assert_eq!(game.fighter(Side::Human).health(), 92);
        assert_eq!(game.fighter(Side::Ai).super_meter(), 8);
        assert!(game.fighter(Side::Human).juggle_deadline().is_none());
    }

    #[test]
    fn test_ai_juggles_airborne_human() {
        let mut arena = arena();
        let mut game = close_quarters_as(&mut arena, "elon");

        frame(&mut game, &mut arena, &[KeyCode::W], FRAME);
        arena.step(FRAME);
        assert!(!arena.body(Side::Human).is_grounded());

        game.set_ai_enabled(true);
        frame(&mut game, &mut arena, &[], FRAME);
        // 8 base + 2 juggle bonus
        assert_eq!(game.fighter(Side::Human).health(), 90);
        assert_eq!(game.fighter(Side::Ai).super_meter(), meter_gain(Side::Ai));
        assert_eq!(
            game.fighter(Side::Human).juggle_deadline(),
            Some(game.now() + 300)
        );
    }

    #[test]
    fn test_super_needs_full_meter() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);

        game.fighter_mut(Side::Human).gain_meter(99);
        frame(&mut game, &mut arena, &[KeyCode::Enter], FRAME);
        assert!(!game.fighter(Side::Human).is_attacking());
        assert_eq!(game.fighter(Side::Human).super_meter(), 99);

        game.fighter_mut(Side::Human).gain_meter(1);
        frame(&mut game, &mut arena, &[KeyCode::Enter], FRAME);
        let human = game.fighter(Side::Human);
        assert_eq!(human.current_attack(), Some(AttackKind::Super));
        assert_eq!(human.super_meter(), 9);
        // 10 base + 7 super bonus
        assert_eq!(game.fighter(Side::Ai).health(), 83);
    }

    #[test]
    fn test_ai_closes_distance() {
        let mut arena = arena();
        let setup = MatchSetup {
            selected: "elon".to_string(),
            difficulty: 5,
        };
        let mut game = Match::create(&mut arena, &Roster::standard(), &setup, fastrand::Rng::with_seed(42));
        arena.place_on_ground(Side::Human, 400.0);
        arena.place_on_ground(Side::Ai, 600.0);

        game.update(&mut arena, FRAME);
        let vx = arena.body(Side::Ai).velocity().x;
        assert!((-255.0..=-235.0).contains(&vx), "vx = {vx}");
    }

    #[test]
    fn test_ai_idle_when_disabled() {
        let mut arena = arena();
        let mut game = close_quarters(&mut arena);
        arena.place_on_ground(Side::Ai, 800.0);
        idle(&mut game, &mut arena, 10);
        assert_eq!(arena.body(Side::Ai).velocity().x, 0.0);
        assert_eq!(game.fighter(Side::Human).health(), 100);
    }
}
