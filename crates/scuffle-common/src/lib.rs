//! # Scuffle Common
//!
//! Common types shared by the Scuffle crates:
//! - Combatant sides
//! - Axis-aligned rectangles for hit detection
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod geometry;
pub mod side;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::side::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_are_opposed() {
        assert_eq!(Side::Human.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Human);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(80.0, 80.0));
        let b = Rect::from_center(Vec2::new(60.0, 0.0), Vec2::new(80.0, 80.0));
        let c = Rect::from_center(Vec2::new(200.0, 0.0), Vec2::new(80.0, 80.0));

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
