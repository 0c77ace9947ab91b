//! Game tuning and preferences
//!
//! Every gameplay constant lives in an immutable [`GameConfig`] handed to the
//! simulation at startup, so tests can vary gravity or gap size without
//! touching process-wide state. An optional `tuning.json` in the working
//! directory overrides the defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in world units
    pub width: f32,
    /// Playfield height in world units
    pub height: f32,
    /// Downward acceleration applied to the bird each tick
    pub gravity: f32,
    /// Velocity the bird is set to on a flap (negative = upward)
    pub flap_impulse: f32,
    /// Horizontal pipe velocity per tick (negative = leftward)
    pub pipe_speed: f32,
    /// Vertical extent of the passable gap
    pub pipe_gap: f32,
    /// Pipe width in world units
    pub pipe_width: f32,
    /// Minimum distance between the gap and the playfield edges
    pub pipe_margin: f32,
    /// Ticks between pipe spawns
    pub pipe_spawn_ticks: u32,
    /// Bird collision half-extent
    pub bird_radius: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_margin: PIPE_MARGIN,
            pipe_spawn_ticks: PIPE_SPAWN_TICKS,
            bird_radius: BIRD_RADIUS,
            tick_rate: TICK_RATE,
        }
    }
}

impl GameConfig {
    /// Tuning file, relative to the working directory
    pub const TUNING_FILE: &'static str = "tuning.json";

    /// Where the bird spawns at the start of every round
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.width / 4.0, self.height / 2.0)
    }

    /// Legal band for a pipe's gap top: `[margin, height - gap - margin]`
    pub fn gap_top_range(&self) -> (f32, f32) {
        (self.pipe_margin, self.height - self.pipe_gap - self.pipe_margin)
    }

    /// Startup precondition check. Invalid tuning is fatal: there is no way
    /// to recover mid-session from a gap that cannot fit the playfield.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 || self.tick_rate == 0 {
            return Err(ConfigError::EmptyPlayfield);
        }
        let required = self.pipe_gap + 2.0 * self.pipe_margin;
        if self.height <= required {
            return Err(ConfigError::GapDoesNotFit {
                height: self.height,
                required,
            });
        }
        Ok(())
    }

    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed. Absent keys keep their default values.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded tuning from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Fatal tuning problems detected at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Playfield too short to contain the gap plus both margins
    GapDoesNotFit { height: f32, required: f32 },
    /// Playfield dimensions or tick rate are not positive
    EmptyPlayfield,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GapDoesNotFit { height, required } => write!(
                f,
                "playfield height {height} cannot fit the pipe gap plus margins ({required} needed)"
            ),
            ConfigError::EmptyPlayfield => {
                write!(f, "playfield dimensions and tick rate must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
