//! Asset manifest declared to the host loader during preload.

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Kind of asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Texture
    Image,
    /// Sound or music
    Audio,
}

/// One asset identifier and its source path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Asset kind
    pub kind: AssetKind,
    /// Key referenced by gameplay
    pub key: String,
    /// Source path relative to the game root
    pub path: String,
}

impl AssetEntry {
    fn image(key: &str) -> Self {
        Self {
            kind: AssetKind::Image,
            key: key.to_string(),
            path: format!("assets/{key}.png"),
        }
    }

    fn audio(key: &str, file: &str) -> Self {
        Self {
            kind: AssetKind::Audio,
            key: key.to_string(),
            path: format!("assets/{file}.mp3"),
        }
    }
}

/// Hit sound key.
pub const PUNCH_SOUND: &str = "punch";
/// Background music key.
pub const MUSIC: &str = "bgmusic";
/// Arena backdrop key.
pub const BACKGROUND: &str = "background";

/// Builds the full manifest for a roster.
#[must_use]
pub fn manifest(roster: &Roster) -> Vec<AssetEntry> {
    let mut entries = vec![
        AssetEntry::image(BACKGROUND),
        AssetEntry::image("spark"),
        AssetEntry::image("blood"),
    ];
    for character in roster.iter() {
        for key in [
            &character.sprite,
            &character.punch_sprite,
            &character.kick_sprite,
        ] {
            if !entries.iter().any(|e| &e.key == key) {
                entries.push(AssetEntry::image(key));
            }
        }
    }
    entries.push(AssetEntry::audio(PUNCH_SOUND, "punch"));
    entries.push(AssetEntry::audio(MUSIC, "bg"));
    entries
}
