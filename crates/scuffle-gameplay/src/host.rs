//! Host engine seams.
//!
//! Physics integration, collision, input polling, audio and asset loading
//! belong to the host engine. Gameplay reaches them only through these
//! traits.

use glam::Vec2;
use scuffle_common::{Rect, Side};

use crate::assets::AssetEntry;
use crate::input::InputManager;

/// Physics body of one fighter, owned by the host.
pub trait FighterBody {
    /// Centre position in screen coordinates.
    fn position(&self) -> Vec2;

    /// Current velocity.
    fn velocity(&self) -> Vec2;

    /// Whether the body is resting on the ground.
    fn is_grounded(&self) -> bool;

    /// Sets horizontal velocity.
    fn set_velocity_x(&mut self, vx: f32);

    /// Sets vertical velocity (negative is up).
    fn set_velocity_y(&mut self, vy: f32);

    /// Collision bounds of the body.
    fn bounds(&self) -> Rect;
}

/// Host engine services used by a match.
pub trait Host {
    /// Concrete body type.
    type Body: FighterBody;

    /// Creates (or resets) the body for a side.
    fn spawn_body(&mut self, side: Side, position: Vec2, scale: Vec2);

    /// Body of a side.
    fn body(&self, side: Side) -> &Self::Body;

    /// Mutable body of a side.
    fn body_mut(&mut self, side: Side) -> &mut Self::Body;

    /// Tests an attack box against the body of `target`.
    fn overlaps_body(&self, area: &Rect, target: Side) -> bool {
        self.body(target).bounds().overlaps(area)
    }

    /// Stops all physics simulation.
    fn pause_physics(&mut self);

    /// Whether physics simulation is paused.
    fn is_physics_paused(&self) -> bool;

    /// Keyboard state for this frame.
    fn keyboard(&self) -> &InputManager;

    /// Whether a sound is already playing.
    fn is_sound_playing(&self, key: &str) -> bool;

    /// Registers an asset with the host loader.
    fn declare_asset(&mut self, asset: &AssetEntry);

    /// Size of the play area.
    fn viewport(&self) -> Vec2;
}
