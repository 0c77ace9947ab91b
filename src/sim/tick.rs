//! Fixed timestep simulation tick
//!
//! Advances the session deterministically. The update order within Playing
//! is load-bearing: queued flap, spawn check, bird integration, pipe scroll
//! with pass scoring in spawn order, off-screen cleanup, then termination
//! checks. Scoring always sees a pipe's post-move position, and cleanup
//! never drops a pipe before its scoring check in the same tick.

use super::collision::{bird_out_of_bounds, bird_pipe_collision};
use super::state::{GamePhase, GameState, Pipe};
use crate::config::GameConfig;

/// Input commands drained for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Upward impulse; only meaningful while Playing
    pub flap: bool,
    /// Start from Menu, restart from GameOver
    pub confirm: bool,
    /// Terminate; honored in every phase
    pub quit: bool,
}

/// Side effects the shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pipe's trailing edge cleared the bird
    Scored { total: u32 },
    /// The bird hit something; the round is over
    GameOver { score: u32 },
    /// The finished round beat the stored best
    NewHighScore(u32),
}

/// Advance the game by one fixed tick.
///
/// Commands that make no sense in the current phase are ignored rather than
/// treated as errors.
pub fn tick(state: &mut GameState, config: &GameConfig, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Quit wins over everything and works from any phase.
    if input.quit {
        state.phase = GamePhase::Exiting;
        return events;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            if input.confirm {
                state.start_round(config);
            }
        }

        GamePhase::Playing => {
            // Queued flap applies before any movement.
            if input.flap {
                state.bird.flap(config.flap_impulse);
            }

            // Spawn cadence: a fresh pipe at the right edge every interval.
            // It scrolls with the rest this same tick.
            state.spawn_timer += 1;
            if state.spawn_timer >= config.pipe_spawn_ticks {
                let pipe = Pipe::spawn(config.width, config, &mut state.rng);
                state.pipes.push(pipe);
                state.spawn_timer = 0;
            }

            // Integrate the bird, then scroll pipes and score passes in
            // spawn order against post-move positions.
            state.bird.tick(config.gravity);
            let bird_x = state.bird.pos.x;
            for pipe in &mut state.pipes {
                pipe.tick(config.pipe_speed);
                if pipe.has_been_passed(bird_x, config) {
                    state.score += 1;
                    events.push(GameEvent::Scored { total: state.score });
                }
            }
            state.pipes.retain(|p| !p.is_off_screen(config));

            // Termination: playfield bounds or any pipe hit.
            let dead = bird_out_of_bounds(&state.bird, config)
                || state
                    .pipes
                    .iter()
                    .any(|p| bird_pipe_collision(&state.bird, p, config));
            if dead {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::GameOver { score: state.score });
                if state.score > state.high_score {
                    state.high_score = state.score;
                    events.push(GameEvent::NewHighScore(state.high_score));
                }
            }
        }

        GamePhase::Exiting => {}
    }

    events
}
