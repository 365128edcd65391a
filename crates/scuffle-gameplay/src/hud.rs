//! HUD layout model: health bars, name labels and combo text position.

use glam::Vec2;
use scuffle_common::Side;
use serde::{Deserialize, Serialize};

use crate::fighter::MAX_HEALTH;

/// Width of a full health bar.
pub const BAR_MAX_WIDTH: f32 = 160.0;
/// Health bar height.
pub const BAR_HEIGHT: f32 = 14.0;
/// Smallest drawn bar width, even at zero health.
pub const BAR_MIN_WIDTH: f32 = 6.0;

const BAR_Y: f32 = 12.0;
const LABEL_Y: f32 = 6.0;
const COMBO_Y: f32 = 48.0;
const HUMAN_BAR_OFFSET: f32 = -230.0;
const AI_BAR_OFFSET: f32 = 80.0;

/// Drawn width of a health bar.
#[must_use]
pub fn bar_width(health: u32) -> f32 {
    (BAR_MAX_WIDTH * health.min(MAX_HEALTH) as f32 / MAX_HEALTH as f32).max(BAR_MIN_WIDTH)
}

/// One fighter's health bar with its name label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBar {
    /// Left-middle anchor of the bar
    pub origin: Vec2,
    /// Current width
    pub width: f32,
    /// Fill colour (0xRRGGBB)
    pub color: u32,
    /// Character name
    pub label: String,
    /// Top-left anchor of the label
    pub label_origin: Vec2,
}

/// HUD state for both fighters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    bars: [HealthBar; 2],
    combo_anchor: Vec2,
}

impl Hud {
    /// Lays out the HUD for a viewport width.
    #[must_use]
    pub fn new(viewport_width: f32, human_name: &str, ai_name: &str) -> Self {
        let cx = viewport_width / 2.0;
        let bar = |offset: f32, color: u32, label: &str| HealthBar {
            origin: Vec2::new(cx + offset, BAR_Y),
            width: BAR_MAX_WIDTH,
            color,
            label: label.to_string(),
            label_origin: Vec2::new(cx + offset, LABEL_Y),
        };
        Self {
            bars: [
                bar(HUMAN_BAR_OFFSET, 0xff3333, human_name),
                bar(AI_BAR_OFFSET, 0x3333ff, ai_name),
            ],
            combo_anchor: Vec2::new(cx, COMBO_Y),
        }
    }

    /// Resizes the bars to the current health and keeps labels aligned.
    pub fn sync(&mut self, human_health: u32, ai_health: u32) {
        for (bar, health) in self.bars.iter_mut().zip([human_health, ai_health]) {
            bar.width = bar_width(health);
            bar.label_origin.x = bar.origin.x;
        }
    }

    /// Bar of a side.
    #[must_use]
    pub fn bar(&self, side: Side) -> &HealthBar {
        &self.bars[side.index()]
    }

    /// Centre of the combo text.
    #[must_use]
    pub fn combo_anchor(&self) -> Vec2 {
        self.combo_anchor
    }
}
