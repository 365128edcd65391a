//! Axis-aligned rectangles used for body and attack-box overlap tests.

pub use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as centre and full size.
///
/// Screen coordinates: x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Centre point
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its centre and full size.
    #[must_use]
    pub const fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Minimum (top-left) corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    /// Maximum (bottom-right) corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }

    /// Checks whether two rectangles intersect. Touching edges do not count.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Checks whether a point lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_center(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_corners() {
        let r = Rect::from_center(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::ZERO));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
    }

    proptest! {
        #[test]
        fn test_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let a = Rect::from_center(Vec2::new(ax, ay), Vec2::new(w, h));
            let b = Rect::from_center(Vec2::new(bx, by), Vec2::new(h, w));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
