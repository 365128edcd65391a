//! Runner configuration.
//!
//! Arena size, frame rate, match setup and key bindings for headless runs.
//! Configuration can be loaded from and saved to a TOML file.

use scuffle_common::{ConfigError, ScuffleResult};
use scuffle_gameplay::ai::DEFAULT_DIFFICULTY;
use scuffle_gameplay::input::KeyBindings;
use scuffle_gameplay::scene::{MatchSetup, DEFAULT_CHARACTER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "scuffle.toml";

/// Highest accepted AI difficulty.
const MAX_DIFFICULTY: u32 = 10;

/// Engine configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Arena Settings ===
    /// Play area width in pixels
    pub arena_width: u32,
    /// Play area height in pixels
    pub arena_height: u32,
    /// Simulated frames per second
    pub target_fps: u32,
    /// Pace frames to the wall clock instead of running flat out
    pub realtime: bool,

    // === Match Settings ===
    /// Human character key
    pub selected: String,
    /// AI difficulty (0 = default)
    pub difficulty: u32,
    /// RNG seed (None = random)
    pub seed: Option<u64>,
    /// Frame limit for one run
    pub max_frames: u32,
    /// Run the AI opponent
    pub ai_enabled: bool,
    /// Drive the human side with a second AI
    pub autopilot: bool,
    /// RON roster file (None = bundled roster)
    pub roster_path: Option<PathBuf>,

    // === Input ===
    /// Human key bindings
    pub bindings: KeyBindings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Arena
            arena_width: 960,
            arena_height: 540,
            target_fps: 60,
            realtime: false,

            // Match
            selected: DEFAULT_CHARACTER.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
            max_frames: 60 * 180, // 3 minutes
            ai_enabled: true,
            autopilot: true,
            roster_path: None,

            // Input
            bindings: KeyBindings::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match Self::from_toml(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("{e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Parse and validate a configuration document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate();
        Ok(config)
    }

    /// Save configuration to the default file location.
    pub fn save(&self) -> ScuffleResult<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ScuffleResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Default configuration file path (working directory).
    fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.arena_width = self.arena_width.clamp(320, 3840);
        self.arena_height = self.arena_height.clamp(240, 2160);
        self.target_fps = self.target_fps.clamp(30, 240);
        self.difficulty = self.difficulty.min(MAX_DIFFICULTY);
        self.max_frames = self.max_frames.max(1);
        if self.selected.trim().is_empty() {
            self.selected = DEFAULT_CHARACTER.to_string();
        }
    }

    /// Match setup described by this configuration.
    #[must_use]
    pub fn setup(&self) -> MatchSetup {
        MatchSetup {
            selected: self.selected.clone(),
            difficulty: self.difficulty,
        }
    }

    /// Overrides the match setup, e.g. from a command-line payload.
    pub fn apply_setup(&mut self, setup: MatchSetup) {
        self.selected = setup.selected;
        self.difficulty = setup.difficulty;
        self.validate();
    }
}
