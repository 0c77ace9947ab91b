//! Gapwing - a flappy-gap arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Terminal presentation, reads per-tick frames only
//! - `config`: Immutable game tuning, optionally loaded from disk
//! - `highscore`: Single-integer high score persistence

pub mod config;
pub mod highscore;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Default tuning values, collected in [`GameConfig::default`]
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions in world units
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Velocity the bird is set to on a flap (negative = upward)
    pub const FLAP_IMPULSE: f32 = -12.0;

    /// Horizontal pipe velocity per tick (negative = leftward)
    pub const PIPE_SPEED: f32 = -2.0;
    /// Vertical extent of the passable gap
    pub const PIPE_GAP: f32 = 180.0;
    /// Pipe width in world units
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Minimum distance between the gap and the playfield edges
    pub const PIPE_MARGIN: f32 = 50.0;
    /// Ticks between pipe spawns (2 seconds at 60 Hz)
    pub const PIPE_SPAWN_TICKS: u32 = 120;

    /// Bird collision half-extent
    pub const BIRD_RADIUS: f32 = 20.0;
}
