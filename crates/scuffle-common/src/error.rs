//! Error types for Scuffle.
//!
//! Gameplay itself never fails: invalid states degrade to silent no-ops.
//! These types only cover the data that enters from outside a match.

use thiserror::Error;

/// Top-level error type for Scuffle operations.
#[derive(Debug, Error)]
pub enum ScuffleError {
    /// Character roster errors
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// Match setup errors
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Character roster errors.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster source could not be parsed
    #[error("Failed to parse roster: {0}")]
    Parse(String),

    /// Roster defines no characters
    #[error("Roster is empty")]
    Empty,
}

/// Match setup payload errors.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Payload was not valid JSON for a setup request
    #[error("Invalid setup payload: {0}")]
    InvalidPayload(String),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Configuration could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// Result type alias for Scuffle operations.
pub type ScuffleResult<T> = Result<T, ScuffleError>;
