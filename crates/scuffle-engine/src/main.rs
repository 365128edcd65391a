//! # Scuffle Engine
//!
//! Headless runner for Scuffle, a one-on-one 2D fighting game.
//!
//! Runs a full match against the AI on a kinematic arena, optionally with
//! an autopilot playing the human side. An optional first argument is a
//! JSON setup payload such as `{"selected":"trump","difficulty":5}`, or
//! `--save-config` to write the current configuration to `scuffle.toml`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod autopilot;
mod config;
mod timing;

use anyhow::Result;
use scuffle_gameplay::scene::MatchSetup;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::EngineConfig;

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("scuffle=info".parse()?))
        .init();

    info!("Scuffle starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = EngineConfig::load();
    match std::env::args().nth(1).as_deref() {
        Some("--save-config") => {
            config.save()?;
            return Ok(());
        },
        Some(payload) => config.apply_setup(MatchSetup::from_json(payload)?),
        None => {},
    }

    let report = app::run(&config)?;
    info!("{}", serde_json::to_string(&report)?);

    info!("Scuffle shutdown complete");
    Ok(())
}
