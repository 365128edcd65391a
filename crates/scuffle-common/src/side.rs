//! Combatant sides.

use serde::{Deserialize, Serialize};

/// One of the two combatants in a match.
///
/// A match always has exactly one human-controlled fighter and one
/// AI-controlled fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Keyboard-controlled fighter (player one).
    Human,
    /// Computer-controlled fighter (player two).
    Ai,
}

impl Side {
    /// Both sides in update order.
    pub const BOTH: [Self; 2] = [Self::Human, Self::Ai];

    /// Returns the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }

    /// Index into two-element per-side arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Ai => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Ai => write!(f, "ai"),
        }
    }
}
