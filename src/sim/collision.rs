//! Axis-aligned collision geometry
//!
//! The playfield is a plain rectangle world: the bird's collision box tested
//! against the two barrier rectangles of each pipe, plus the floor/ceiling
//! check. Overlap is inclusive of touching edges.

use glam::Vec2;

use super::state::{Bird, Pipe};
use crate::config::GameConfig;

/// Axis-aligned rectangle spanning `min` to `max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle centered at `center` with the given half-extents
    pub fn centered(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Overlap test, inclusive of touching edges
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// True if the bird overlaps either barrier of the pipe.
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe, config: &GameConfig) -> bool {
    let bounds = bird.bounds();
    bounds.intersects(&pipe.top_rect(config)) || bounds.intersects(&pipe.bottom_rect(config))
}

/// True if the bird touches the ceiling or the floor. Fatal either way.
pub fn bird_out_of_bounds(bird: &Bird, config: &GameConfig) -> bool {
    bird.pos.y - bird.radius <= 0.0 || bird.pos.y + bird.radius >= config.height
}
