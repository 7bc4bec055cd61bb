use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;

/// Sprite-sheet animation parameters shared by every language icon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub frames: u32,
    /// Simulation ticks each frame stays on screen.
    pub frame_delay: u32,
    pub frame_size: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: 32,
            frame_delay: 2,
            frame_size: 64,
        }
    }
}

/// Static tuning of a game session. Every field may be omitted from the
/// JSON file and falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub ground_level: f32,
    pub initial_lives: u32,
    pub score_increment: u32,
    pub player_size: f32,
    pub language_size: f32,

    pub spawn_interval: u32,
    pub initial_spawns: u32,
    pub despawn_x: f32,
    pub recycle_escaped: bool,

    pub animation: AnimationSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 400.0,
            gravity: 0.8,
            jump_force: -15.0,
            ground_level: 390.0,
            initial_lives: 3,
            score_increment: 100,
            player_size: 64.0,
            language_size: 64.0,
            spawn_interval: 120,
            initial_spawns: 3,
            despawn_x: -50.0,
            recycle_escaped: false,
            animation: AnimationSettings::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(data: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(data).context("malformed game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.canvas_width > 0.0 && self.canvas_height > 0.0,
            "canvas must have a positive size"
        );
        ensure!(
            self.player_size > 0.0 && self.language_size > 0.0,
            "sprite sizes must be positive"
        );
        ensure!(self.initial_lives > 0, "initial_lives must be at least 1");
        ensure!(self.spawn_interval > 0, "spawn_interval must be at least 1");
        ensure!(
            self.language_size < self.ground_level - self.language_size,
            "ground_level {} leaves no room to spawn {}px languages",
            self.ground_level,
            self.language_size
        );
        ensure!(
            self.animation.frames > 0 && self.animation.frame_delay > 0,
            "animation needs at least one frame and a frame delay of at least 1"
        );
        Ok(())
    }

    /// Vertical band icons spawn in.
    pub fn spawn_band(&self) -> std::ops::Range<f32> {
        self.language_size..self.ground_level - self.language_size
    }

    /// Horizontal speed band, scaled to the canvas width.
    pub fn speed_band(&self) -> std::ops::Range<f32> {
        -self.canvas_width * 0.01..-self.canvas_width * 0.005
    }

    pub fn spawn_x(&self) -> f32 {
        self.canvas_width + self.language_size
    }
}
