//! Fighter combat state machine.
//!
//! A fighter's state is a combination of flags rather than an explicit
//! enum:
//! - Idle: no flag set
//! - Attacking: `is_attacking`, with [`AttackKind`] naming the swing
//! - Dashing: `dashing` plus `invincible`
//! - Hit-stunned: `invincible` after a landed hit
//! - Jumping: tracked by the host body (not grounded)
//!
//! Every timed state ends through a [`Timer`] slot owned by the fighter's
//! side. The overridable actions live in an [`ActionTable`] so that a
//! character's [`UniquePower`](crate::power::UniquePower) can replace one
//! entry without touching the others.

use glam::Vec2;
use scuffle_common::{Rect, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::PUNCH_SOUND;
use crate::clock::{Millis, Timer};
use crate::context::CombatContext;
use crate::events::{Decal, HostEffect};
use crate::host::FighterBody;
use crate::roster::CharacterConfig;

/// Starting and maximum health.
pub const MAX_HEALTH: u32 = 100;
/// Super meter capacity; a super needs a full meter.
pub const MAX_SUPER_METER: u32 = 100;

/// Punch active window.
pub const PUNCH_WINDOW: Millis = 160;
/// Kick active window.
pub const KICK_WINDOW: Millis = 230;
/// Super move active window.
pub const SUPER_WINDOW: Millis = 400;
/// Dash duration.
pub const DASH_DURATION: Millis = 130;
/// Horizontal dash speed.
pub const DASH_SPEED: f32 = 400.0;
/// Upward jump impulse (screen y grows downward).
pub const JUMP_VELOCITY: f32 = -400.0;
/// Invincibility after taking a hit.
pub const HIT_INVINCIBILITY: Millis = 420;
/// Juggle deadline offset recorded when hit in the air.
pub const JUGGLE_WINDOW: Millis = 300;
/// Extra damage against an airborne target.
pub const JUGGLE_BONUS: u32 = 2;
/// Extra damage from a super move.
pub const SUPER_BONUS: u32 = 7;
/// Time scale while hit-stop slow motion is active.
pub const HIT_TIME_SCALE: f32 = 0.13;
/// Sprite growth during a super move.
pub const SUPER_SCALE: Vec2 = Vec2::new(1.21, 1.16);
/// Default attack box size.
pub const ATTACK_BOX_SIZE: Vec2 = Vec2::new(80.0, 80.0);

/// Kind of swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Quick hand strike
    Punch,
    /// Slower leg strike
    Kick,
    /// Meter-gated enhanced strike
    Super,
}

/// Which texture the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pose {
    /// Default stance
    #[default]
    Idle,
    /// Punch texture (also used by the super move)
    Punch,
    /// Kick texture
    Kick,
}

/// Visual state read by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Current pose
    pub pose: Pose,
    /// Mirror horizontally
    pub flip_x: bool,
    /// Sprite scale (x, y)
    pub scale: Vec2,
}

/// Feedback parameters of a landed hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFeedback {
    /// Hit sound volume
    pub volume: f32,
    /// Camera shake duration
    pub shake_duration: Millis,
    /// Camera shake intensity
    pub shake_intensity: f32,
    /// Slow-motion duration (game time)
    pub slow_motion: Millis,
    /// Spark scale
    pub spark_scale: f32,
    /// Spark lifetime
    pub spark_lifetime: Millis,
    /// Blood decal scale
    pub blood_scale: f32,
    /// Blood decal lifetime
    pub blood_lifetime: Millis,
}

impl HitFeedback {
    /// Feedback for punches and kicks.
    pub const NORMAL: Self = Self {
        volume: 1.5,
        shake_duration: 85,
        shake_intensity: 0.008,
        slow_motion: 60,
        spark_scale: 0.6,
        spark_lifetime: 210,
        blood_scale: 0.33,
        blood_lifetime: 180,
    };

    /// Feedback for super moves.
    pub const SUPER: Self = Self {
        volume: 2.1,
        shake_duration: 190,
        shake_intensity: 0.01,
        slow_motion: 90,
        spark_scale: 1.0,
        spark_lifetime: 390,
        blood_scale: 0.56,
        blood_lifetime: 370,
    };
}

/// An incoming hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Side that landed the hit
    pub attacker: Side,
    /// Damage before bonuses
    pub base_damage: u32,
    /// Where the hit effects are drawn
    pub position: Vec2,
    /// Target was airborne
    pub juggle: bool,
    /// Delivered by a super move
    pub super_attack: bool,
}

impl Hit {
    /// Total damage including juggle and super bonuses.
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.base_damage
            + if self.juggle { JUGGLE_BONUS } else { 0 }
            + if self.super_attack { SUPER_BONUS } else { 0 }
    }
}

/// Result of an accepted hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    /// Damage applied
    pub damage: u32,
    /// Health left
    pub health: u32,
}

/// Overridable action without arguments.
pub type ActionFn = fn(&mut Fighter, &mut dyn FighterBody, &mut CombatContext);
/// Overridable hit handler. Returns `None` when the hit is ignored.
pub type TakeHitFn =
    fn(&mut Fighter, &mut dyn FighterBody, &mut CombatContext, &Hit) -> Option<HitOutcome>;

/// Per-fighter dispatch table for the overridable actions.
#[derive(Clone, Copy)]
pub struct ActionTable {
    /// Punch
    pub punch: ActionFn,
    /// Kick
    pub kick: ActionFn,
    /// Jump
    pub jump: ActionFn,
    /// Take a hit
    pub take_hit: TakeHitFn,
}

impl Default for ActionTable {
    fn default() -> Self {
        Self {
            punch: base_punch,
            kick: base_kick,
            jump: base_jump,
            take_hit: base_take_hit,
        }
    }
}

impl std::fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionTable").finish_non_exhaustive()
    }
}

/// One combatant.
#[derive(Debug, Clone)]
pub struct Fighter {
    side: Side,
    character: CharacterConfig,
    health: u32,
    super_meter: u32,
    is_attacking: bool,
    has_hit: bool,
    dashing: bool,
    invincible: bool,
    current_attack: Option<AttackKind>,
    facing_left: bool,
    attack_box: Rect,
    juggle_deadline: Option<Millis>,
    appearance: Appearance,
    actions: ActionTable,
}

impl Fighter {
    /// Creates a fighter at full health with its unique power applied.
    #[must_use]
    pub fn new(side: Side, character: CharacterConfig, facing_left: bool) -> Self {
        let mut actions = ActionTable::default();
        if let Some(power) = character.power {
            power.apply(&mut actions);
        }
        let scale = character.base_scale();
        Self {
            side,
            character,
            health: MAX_HEALTH,
            super_meter: 0,
            is_attacking: false,
            has_hit: false,
            dashing: false,
            invincible: false,
            current_attack: None,
            facing_left,
            attack_box: Rect::from_center(Vec2::ZERO, ATTACK_BOX_SIZE),
            juggle_deadline: None,
            appearance: Appearance {
                pose: Pose::Idle,
                flip_x: facing_left,
                scale: Vec2::splat(scale),
            },
            actions,
        }
    }

    /// Side this fighter plays for.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Character configuration.
    #[must_use]
    pub fn character(&self) -> &CharacterConfig {
        &self.character
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Current super meter.
    #[must_use]
    pub fn super_meter(&self) -> u32 {
        self.super_meter
    }

    /// Whether a swing is active.
    #[must_use]
    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    /// Whether the active swing already landed.
    #[must_use]
    pub fn has_hit(&self) -> bool {
        self.has_hit
    }

    /// Whether a dash is active.
    #[must_use]
    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    /// Whether incoming hits are ignored.
    #[must_use]
    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Active swing kind.
    #[must_use]
    pub fn current_attack(&self) -> Option<AttackKind> {
        self.current_attack
    }

    /// Facing direction.
    #[must_use]
    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    /// Changes facing direction; takes effect on the next attack-box refresh.
    pub fn set_facing_left(&mut self, facing_left: bool) {
        self.facing_left = facing_left;
    }

    /// Attack box as of the last refresh.
    #[must_use]
    pub fn attack_box(&self) -> Rect {
        self.attack_box
    }

    /// Deadline recorded the last time this fighter was hit in the air.
    #[must_use]
    pub fn juggle_deadline(&self) -> Option<Millis> {
        self.juggle_deadline
    }

    /// Visual state.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Texture key for the current pose.
    #[must_use]
    pub fn texture_key(&self) -> &str {
        match self.appearance.pose {
            Pose::Idle => &self.character.sprite,
            Pose::Punch => &self.character.punch_sprite,
            Pose::Kick => &self.character.kick_sprite,
        }
    }

    /// Punch, through the action table.
    pub fn punch(&mut self, body: &mut dyn FighterBody, ctx: &mut CombatContext) {
        let punch = self.actions.punch;
        punch(self, body, ctx);
    }

    /// Kick, through the action table.
    pub fn kick(&mut self, body: &mut dyn FighterBody, ctx: &mut CombatContext) {
        let kick = self.actions.kick;
        kick(self, body, ctx);
    }

    /// Jump, through the action table.
    pub fn jump(&mut self, body: &mut dyn FighterBody, ctx: &mut CombatContext) {
        let jump = self.actions.jump;
        jump(self, body, ctx);
    }

    /// Receive a hit, through the action table.
    pub fn take_hit(
        &mut self,
        body: &mut dyn FighterBody,
        ctx: &mut CombatContext,
        hit: &Hit,
    ) -> Option<HitOutcome> {
        let take_hit = self.actions.take_hit;
        take_hit(self, body, ctx, hit)
    }

    /// Super move. Needs a full meter and no active swing.
    pub fn super_move(&mut self, ctx: &mut CombatContext) {
        if self.is_attacking || self.super_meter < MAX_SUPER_METER {
            return;
        }
        self.super_meter = 0;
        self.begin_attack(AttackKind::Super, SUPER_WINDOW, ctx);
        self.appearance.scale *= SUPER_SCALE;
    }

    /// Dash in direction `dir` (-1 left, 1 right).
    pub fn dash(&mut self, dir: f32, body: &mut dyn FighterBody, ctx: &mut CombatContext) {
        if self.dashing || self.is_attacking {
            return;
        }
        self.dashing = true;
        self.invincible = true;
        body.set_velocity_x(dir * DASH_SPEED);
        ctx.schedule(Timer::DashWindow(self.side), DASH_DURATION);
        debug!(side = %self.side, dir, "dash");
    }

    /// Starts a swing. Returns `false` when one is already active.
    pub fn begin_attack(&mut self, kind: AttackKind, window: Millis, ctx: &mut CombatContext) -> bool {
        if self.is_attacking {
            return false;
        }
        self.is_attacking = true;
        self.has_hit = false;
        self.current_attack = Some(kind);
        self.appearance.pose = match kind {
            AttackKind::Kick => Pose::Kick,
            AttackKind::Punch | AttackKind::Super => Pose::Punch,
        };
        self.appearance.flip_x = self.facing_left;
        ctx.schedule(Timer::AttackWindow(self.side), window);
        debug!(side = %self.side, ?kind, window, "attack started");
        true
    }

    /// Ends the active swing and restores the default appearance.
    pub fn end_attack(&mut self) {
        self.is_attacking = false;
        self.current_attack = None;
        self.appearance = Appearance {
            pose: Pose::Idle,
            flip_x: self.facing_left,
            scale: Vec2::splat(self.character.base_scale()),
        };
    }

    /// Ends the dash and its invincibility.
    pub fn end_dash(&mut self, body: &mut dyn FighterBody) {
        body.set_velocity_x(0.0);
        self.dashing = false;
        self.invincible = false;
    }

    /// Ends post-hit invincibility.
    pub fn clear_invincibility(&mut self) {
        self.invincible = false;
    }

    /// Marks the active swing as landed. Returns `false` if it had already
    /// landed or no swing is active.
    pub fn latch_hit(&mut self) -> bool {
        if !self.is_attacking || self.has_hit {
            return false;
        }
        self.has_hit = true;
        true
    }

    /// Adds super meter, capped at [`MAX_SUPER_METER`].
    pub fn gain_meter(&mut self, amount: u32) {
        self.super_meter = (self.super_meter + amount).min(MAX_SUPER_METER);
    }

    /// Restores health, capped at [`MAX_HEALTH`].
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Recomputes the attack box in front of the body and syncs the flip.
    pub fn update_attack_box(&mut self, body: &dyn FighterBody) {
        self.appearance.flip_x = self.facing_left;
        let pos = body.position();
        let offset = self.character.hitbox_offset;
        let x = if self.facing_left {
            pos.x - offset
        } else {
            pos.x + offset
        };
        self.attack_box.center = Vec2::new(x, pos.y);
    }

    fn cancel_attack_pose(&mut self) {
        self.is_attacking = false;
        self.current_attack = None;
        self.appearance.pose = Pose::Idle;
    }
}

/// Base punch.
pub fn base_punch(fighter: &mut Fighter, _body: &mut dyn FighterBody, ctx: &mut CombatContext) {
    fighter.begin_attack(AttackKind::Punch, PUNCH_WINDOW, ctx);
}

/// Base kick.
pub fn base_kick(fighter: &mut Fighter, _body: &mut dyn FighterBody, ctx: &mut CombatContext) {
    fighter.begin_attack(AttackKind::Kick, KICK_WINDOW, ctx);
}

/// Base jump: grounded only; cancels any swing and resets the pose.
pub fn base_jump(fighter: &mut Fighter, body: &mut dyn FighterBody, _ctx: &mut CombatContext) {
    if !body.is_grounded() {
        return;
    }
    fighter.cancel_attack_pose();
    body.set_velocity_y(JUMP_VELOCITY);
}

/// Base hit handling.
pub fn base_take_hit(
    fighter: &mut Fighter,
    body: &mut dyn FighterBody,
    ctx: &mut CombatContext,
    hit: &Hit,
) -> Option<HitOutcome> {
    if fighter.invincible {
        return None;
    }
    fighter.invincible = true;
    let damage = hit.damage();
    fighter.health = fighter.health.saturating_sub(damage);

    let feedback = if hit.super_attack {
        HitFeedback::SUPER
    } else {
        HitFeedback::NORMAL
    };
    ctx.effects.play_sound(PUNCH_SOUND, feedback.volume);
    ctx.effects.publish(HostEffect::CameraShake {
        duration: feedback.shake_duration,
        intensity: feedback.shake_intensity,
    });
    ctx.clock.set_time_scale(HIT_TIME_SCALE);
    ctx.schedule(Timer::SlowMotion, feedback.slow_motion);
    ctx.effects.publish(HostEffect::SpawnDecal {
        decal: Decal::Spark,
        position: hit.position,
        scale: feedback.spark_scale,
        lifetime: feedback.spark_lifetime,
    });
    ctx.effects.publish(HostEffect::SpawnDecal {
        decal: Decal::Blood,
        position: hit.position,
        scale: feedback.blood_scale,
        lifetime: feedback.blood_lifetime,
    });

    ctx.register_combo_hit();
    if !body.is_grounded() {
        fighter.juggle_deadline = Some(ctx.now() + JUGGLE_WINDOW);
    }
    ctx.schedule(Timer::Invincibility(fighter.side), HIT_INVINCIBILITY);

    debug!(
        side = %fighter.side,
        damage,
        health = fighter.health,
        attacker = %hit.attacker,
        "hit taken"
    );
    Some(HitOutcome {
        damage,
        health: fighter.health,
    })
}

/// Simple host body for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
}

#[cfg(test)]
impl TestBody {
    pub fn grounded_at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            grounded: true,
        }
    }
}

#[cfg(test)]
impl FighterBody for TestBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.position, Vec2::new(100.0, 150.0))
    }
}
