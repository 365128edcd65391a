//! Character roster.
//!
//! The roster is data: display names, sprite keys, scale, attack-box offset
//! and an optional unique power per character key. Unknown keys resolve to
//! fallback visuals instead of failing.

use ahash::AHashMap;
use scuffle_common::RosterError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::power::UniquePower;

/// Sprite scale used when a character has no configured scale.
pub const DEFAULT_SCALE: f32 = 0.36;
/// Attack-box offset used when a character is not in the roster.
pub const DEFAULT_HITBOX_OFFSET: f32 = 60.0;

/// Configuration for one playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Roster key (e.g. "elon")
    pub key: String,
    /// Name shown on the HUD and in the victory message
    pub display_name: String,
    /// Idle texture key
    pub sprite: String,
    /// Punch texture key
    pub punch_sprite: String,
    /// Kick texture key
    pub kick_sprite: String,
    /// Sprite scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Horizontal distance of the attack box from the fighter's centre
    #[serde(default = "default_hitbox_offset")]
    pub hitbox_offset: f32,
    /// Character-specific behaviour override
    #[serde(default)]
    pub power: Option<UniquePower>,
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

fn default_hitbox_offset() -> f32 {
    DEFAULT_HITBOX_OFFSET
}

impl CharacterConfig {
    /// Creates a character with the conventional `<key>`, `<key>_punch` and
    /// `<key>_kick` sprite keys.
    #[must_use]
    pub fn new(key: &str, display_name: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            sprite: key.to_string(),
            punch_sprite: format!("{key}_punch"),
            kick_sprite: format!("{key}_kick"),
            scale: DEFAULT_SCALE,
            hitbox_offset: DEFAULT_HITBOX_OFFSET,
            power: None,
        }
    }

    /// Set sprite scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set unique power.
    #[must_use]
    pub fn with_power(mut self, power: UniquePower) -> Self {
        self.power = Some(power);
        self
    }

    /// Configuration for a key missing from the roster.
    #[must_use]
    pub fn fallback(key: &str) -> Self {
        Self::new(key, key)
    }

    /// Scale to restore after a super move, or the default when unusable.
    #[must_use]
    pub fn base_scale(&self) -> f32 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            DEFAULT_SCALE
        }
    }
}

/// Ordered set of playable characters.
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<CharacterConfig>,
    index: AHashMap<String, usize>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}

impl Roster {
    /// Builds a roster. Later duplicates of a key replace earlier ones.
    #[must_use]
    pub fn new(characters: Vec<CharacterConfig>) -> Self {
        let mut roster = Self {
            characters: Vec::with_capacity(characters.len()),
            index: AHashMap::new(),
        };
        for character in characters {
            if let Some(&i) = roster.index.get(&character.key) {
                roster.characters[i] = character;
            } else {
                roster
                    .index
                    .insert(character.key.clone(), roster.characters.len());
                roster.characters.push(character);
            }
        }
        roster
    }

    /// The bundled three-character roster.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CharacterConfig::new("elon", "Elon").with_power(UniquePower::DoubleJump),
            CharacterConfig::new("trump", "Trump").with_power(UniquePower::QuickJab),
            CharacterConfig::new("pelosi", "Pelosi").with_power(UniquePower::Regeneration),
        ])
    }

    /// Parses a roster from a RON list of characters.
    pub fn from_ron(source: &str) -> Result<Self, RosterError> {
        let characters: Vec<CharacterConfig> =
            ron::from_str(source).map_err(|e| RosterError::Parse(e.to_string()))?;
        if characters.is_empty() {
            return Err(RosterError::Empty);
        }
        debug!(count = characters.len(), "roster parsed");
        Ok(Self::new(characters))
    }

    /// Looks up a character.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CharacterConfig> {
        self.index.get(key).map(|&i| &self.characters[i])
    }

    /// Looks up a character, falling back to default visuals.
    #[must_use]
    pub fn resolve(&self, key: &str) -> CharacterConfig {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| CharacterConfig::fallback(key))
    }

    /// Characters in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterConfig> {
        self.characters.iter()
    }

    /// Characters other than `key`, in roster order.
    #[must_use]
    pub fn opponents_of(&self, key: &str) -> Vec<&CharacterConfig> {
        self.characters.iter().filter(|c| c.key != key).collect()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Checks whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roster() {
        let roster = Roster::standard();
        assert_eq!(roster.len(), 3);

        let elon = roster.get("elon").expect("elon is bundled");
        assert_eq!(elon.punch_sprite, "elon_punch");
        assert_eq!(elon.kick_sprite, "elon_kick");
        assert_eq!(elon.power, Some(UniquePower::DoubleJump));
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let roster = Roster::standard();
        let ghost = roster.resolve("ghost");
        assert_eq!(ghost.display_name, "ghost");
        assert_eq!(ghost.scale, DEFAULT_SCALE);
        assert_eq!(ghost.hitbox_offset, DEFAULT_HITBOX_OFFSET);
        assert!(ghost.power.is_none());
    }

    #[test]
    fn test_opponents_exclude_selected() {
        let roster = Roster::standard();
        let keys: Vec<&str> = roster
            .opponents_of("trump")
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["elon", "pelosi"]);
    }

    #[test]
    fn test_base_scale_rejects_nonsense() {
        let c = CharacterConfig::new("x", "X").with_scale(0.0);
        assert_eq!(c.base_scale(), DEFAULT_SCALE);
        let c = CharacterConfig::new("x", "X").with_scale(0.5);
        assert_eq!(c.base_scale(), 0.5);
    }

    #[test]
    fn test_from_ron() {
        let source = r#"[
            (
                key: "ninja",
                display_name: "Ninja",
                sprite: "ninja",
                punch_sprite: "ninja_punch",
                kick_sprite: "ninja_kick",
                scale: 0.4,
                power: Some(QuickJab),
            ),
            (
                key: "monk",
                display_name: "Monk",
                sprite: "monk",
                punch_sprite: "monk_punch",
                kick_sprite: "monk_kick",
            ),
        ]"#;
        let roster = Roster::from_ron(source).expect("valid roster");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ninja").map(|c| c.scale), Some(0.4));

        let monk = roster.get("monk").expect("monk parsed");
        assert_eq!(monk.hitbox_offset, DEFAULT_HITBOX_OFFSET);
        assert!(monk.power.is_none());
    }

    #[test]
    fn test_from_ron_errors() {
        assert!(matches!(Roster::from_ron("[]"), Err(RosterError::Empty)));
        assert!(matches!(
            Roster::from_ron("not ron"),
            Err(RosterError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_keys_replace() {
        let roster = Roster::new(vec![
            CharacterConfig::new("a", "First"),
            CharacterConfig::new("a", "Second"),
        ]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.resolve("a").display_name, "Second");
    }
}
