//! Headless match runner.
//!
//! Builds a kinematic arena, sets up one match from the configuration and
//! steps it until a fighter wins or the frame limit is reached.

use anyhow::{Context, Result};
use scuffle_common::Side;
use scuffle_gameplay::arena::KinematicArena;
use scuffle_gameplay::events::HostEffect;
use scuffle_gameplay::input::InputManager;
use scuffle_gameplay::roster::Roster;
use scuffle_gameplay::scene::Match;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::autopilot::Autopilot;
use crate::config::EngineConfig;
use crate::timing::FrameTiming;

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Frames simulated
    pub frames: u32,
    /// Game time at the end of the run
    pub game_time: u64,
    /// Winning side, if the round ended
    pub winner: Option<Side>,
    /// Winner banner text
    pub banner: Option<String>,
    /// Human character key
    pub human: String,
    /// AI character key
    pub ai: String,
    /// Final human health
    pub human_health: u32,
    /// Final AI health
    pub ai_health: u32,
}

/// Loads the roster file, or the bundled roster when none is configured.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let Some(path) = path else {
        return Ok(Roster::standard());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    let roster = Roster::from_ron(&source)?;
    info!("Loaded {} characters from {}", roster.len(), path.display());
    Ok(roster)
}

/// Runs one match to completion.
pub fn run(config: &EngineConfig) -> Result<MatchReport> {
    let roster = load_roster(config.roster_path.as_deref())?;

    let mut arena = KinematicArena::new(config.arena_width as f32, config.arena_height as f32);
    arena.set_keyboard(InputManager::with_bindings(config.bindings.clone()));
    Match::preload(&mut arena, &roster);

    let mut rng = config
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut game = Match::create(&mut arena, &roster, &config.setup(), rng.fork());
    game.set_ai_enabled(config.ai_enabled);
    let mut autopilot = config
        .autopilot
        .then(|| Autopilot::new(config.difficulty, rng.fork()));

    let mut timing = FrameTiming::new(config.target_fps).with_realtime(config.realtime);
    let delta = timing.fixed_delta_ms();
    let mut frames = 0;

    while frames < config.max_frames && !game.is_over() {
        if let Some(pilot) = autopilot.as_mut() {
            for (key, pressed) in pilot.plan(&game, &arena) {
                arena.keyboard_mut().update_key(key, pressed);
            }
        }

        game.update(&mut arena, delta);
        arena.step(delta);

        for effect in game.drain_effects() {
            log_effect(&effect);
            arena.apply_effect(&effect);
        }
        arena.keyboard_mut().end_frame();

        frames += 1;
        timing.end_frame();
    }

    let report = MatchReport {
        frames,
        game_time: game.now(),
        winner: game.winner(),
        banner: game.banner().map(str::to_string),
        human: game.fighter(Side::Human).character().key.clone(),
        ai: game.fighter(Side::Ai).character().key.clone(),
        human_health: game.fighter(Side::Human).health(),
        ai_health: game.fighter(Side::Ai).health(),
    };
    info!(
        frames,
        fps = timing.current_fps(),
        dropped_effects = game.effects().dropped_count(),
        winner = ?report.winner,
        "Run finished"
    );
    Ok(report)
}

fn log_effect(effect: &HostEffect) {
    match effect {
        HostEffect::ComboText(text) if !text.is_empty() => info!("{text}"),
        HostEffect::ShowSpeechBubble(bubble) => info!("AI: {}", bubble.text),
        HostEffect::ShowBanner { text, .. } => info!("{text}"),
        _ => debug!(?effect, "host effect"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quick_config() -> EngineConfig {
        EngineConfig {
            seed: Some(2024),
            max_frames: 600,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_run_respects_frame_limit() {
        let report = run(&quick_config()).expect("run");
        assert!(report.frames <= 600);
        assert!(report.human_health <= 100);
        assert!(report.ai_health <= 100);
        assert_eq!(report.human, "elon");
        assert_ne!(report.ai, "elon");
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let first = run(&quick_config()).expect("run");
        let second = run(&quick_config()).expect("run");
        assert_eq!(first.ai, second.ai);
        assert_eq!(first.frames, second.frames);
        assert_eq!(first.human_health, second.human_health);
        assert_eq!(first.ai_health, second.ai_health);
    }

    #[test]
    fn test_idle_run_reaches_limit() {
        let config = EngineConfig {
            autopilot: false,
            ai_enabled: false,
            max_frames: 120,
            ..quick_config()
        };
        let report = run(&config).expect("run");
        assert_eq!(report.frames, 120);
        assert!(report.winner.is_none());
        assert_eq!(report.human_health, 100);
        assert_eq!(report.ai_health, 100);
    }

    #[test]
    fn test_roster_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("roster.ron");
        fs::write(
            &path,
            r#"[
                (key: "a", display_name: "Alpha", sprite: "a", punch_sprite: "a_punch", kick_sprite: "a_kick"),
                (key: "b", display_name: "Beta", sprite: "b", punch_sprite: "b_punch", kick_sprite: "b_kick"),
            ]"#,
        )
        .expect("write");

        let config = EngineConfig {
            selected: "a".to_string(),
            roster_path: Some(path),
            max_frames: 10,
            ..quick_config()
        };
        let report = run(&config).expect("run");
        assert_eq!(report.human, "a");
        assert_eq!(report.ai, "b");
    }

    #[test]
    fn test_missing_roster_file_fails() {
        assert!(load_roster(Some(Path::new("/nonexistent/roster.ron"))).is_err());
        assert_eq!(load_roster(None).expect("bundled").len(), 3);
    }
}
