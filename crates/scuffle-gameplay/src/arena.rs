//! Headless kinematic host.
//!
//! A minimal stand-in for the host engine: gravity, a floor at the bottom
//! of the play area, side walls, AABB overlap and a keyboard fed by the
//! caller. Used by the headless runner and by tests.

use ahash::AHashSet;
use glam::Vec2;
use scuffle_common::{Rect, Side};
use tracing::trace;

use crate::assets::AssetEntry;
use crate::events::HostEffect;
use crate::host::{FighterBody, Host};
use crate::input::InputManager;

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 1000.0;
/// Body size at scale 1.0.
pub const BODY_BASE_SIZE: Vec2 = Vec2::new(280.0, 420.0);

/// Axis-aligned body integrated with explicit Euler steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBody {
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    grounded: bool,
}

impl ArenaBody {
    fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            grounded: false,
        }
    }
}

impl FighterBody for ArenaBody {
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
        Rect::from_center(self.position, self.size)
    }
}

/// Two-body arena implementing [`Host`].
#[derive(Debug)]
pub struct KinematicArena {
    size: Vec2,
    bodies: [ArenaBody; 2],
    paused: bool,
    keyboard: InputManager,
    playing: AHashSet<String>,
    assets: Vec<AssetEntry>,
}

impl KinematicArena {
    /// Creates an arena of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        let body = ArenaBody::new(size * 0.5, BODY_BASE_SIZE);
        Self {
            size,
            bodies: [body; 2],
            paused: false,
            keyboard: InputManager::new(),
            playing: AHashSet::new(),
            assets: Vec::new(),
        }
    }

    /// Replaces the keyboard (e.g. to apply custom bindings).
    pub fn set_keyboard(&mut self, keyboard: InputManager) {
        self.keyboard = keyboard;
    }

    /// Mutable keyboard, for feeding key states.
    pub fn keyboard_mut(&mut self) -> &mut InputManager {
        &mut self.keyboard
    }

    /// Assets declared so far.
    #[must_use]
    pub fn assets(&self) -> &[AssetEntry] {
        &self.assets
    }

    /// Puts a body on the floor at horizontal position `x`, at rest.
    pub fn place_on_ground(&mut self, side: Side, x: f32) {
        let floor = self.size.y;
        let body = &mut self.bodies[side.index()];
        body.position = Vec2::new(x, floor - body.size.y * 0.5);
        body.velocity = Vec2::ZERO;
        body.grounded = true;
    }

    /// Integrates both bodies over `delta_ms` of real time.
    pub fn step(&mut self, delta_ms: f32) {
        if self.paused {
            return;
        }
        let dt = delta_ms.max(0.0) / 1000.0;
        let (width, floor) = (self.size.x, self.size.y);
        for body in &mut self.bodies {
            body.velocity.y += GRAVITY * dt;
            body.position += body.velocity * dt;

            let half = body.size * 0.5;
            if body.position.x < half.x {
                body.position.x = half.x;
                body.velocity.x = body.velocity.x.max(0.0);
            } else if body.position.x > width - half.x {
                body.position.x = width - half.x;
                body.velocity.x = body.velocity.x.min(0.0);
            }
            if body.position.y < half.y {
                body.position.y = half.y;
                body.velocity.y = body.velocity.y.max(0.0);
            }

            body.grounded = body.position.y + half.y >= floor;
            if body.grounded {
                body.position.y = floor - half.y;
                body.velocity.y = body.velocity.y.min(0.0);
            }
        }
    }

    /// Performs the parts of a host effect the arena models.
    pub fn apply_effect(&mut self, effect: &HostEffect) {
        if let HostEffect::PlaySound {
            key, looped: true, ..
        } = effect
        {
            self.playing.insert(key.clone());
        }
        trace!(?effect, "host effect");
    }
}

impl Host for KinematicArena {
    type Body = ArenaBody;

    fn spawn_body(&mut self, side: Side, position: Vec2, scale: Vec2) {
        self.bodies[side.index()] = ArenaBody::new(position, BODY_BASE_SIZE * scale);
    }

    fn body(&self, side: Side) -> &ArenaBody {
        &self.bodies[side.index()]
    }

    fn body_mut(&mut self, side: Side) -> &mut ArenaBody {
        &mut self.bodies[side.index()]
    }

    fn pause_physics(&mut self) {
        self.paused = true;
    }

    fn is_physics_paused(&self) -> bool {
        self.paused
    }

    fn keyboard(&self) -> &InputManager {
        &self.keyboard
    }

    fn is_sound_playing(&self, key: &str) -> bool {
        self.playing.contains(key)
    }

    fn declare_asset(&mut self, asset: &AssetEntry) {
        self.assets.push(asset.clone());
    }

    fn viewport(&self) -> Vec2 {
        self.size
    }
}
