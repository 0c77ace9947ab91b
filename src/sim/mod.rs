//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock reads
//! - Seeded RNG only
//! - No rendering, file, or terminal dependencies
//!
//! Side effects (high score writes, process exit) cross the boundary as
//! [`GameEvent`]s and the [`GamePhase::Exiting`] phase, which the shell acts
//! on after each tick.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, bird_out_of_bounds, bird_pipe_collision};
pub use state::{Bird, Frame, GamePhase, GameState, Pipe, PipeFrame};
pub use tick::{GameEvent, TickInput, tick};
