//! Single-integer high score persistence
//!
//! The format is deliberately dumb: the decimal ASCII score and nothing else.
//! A missing or unreadable file reads as zero, and write failures are logged
//! and swallowed so a read-only disk never interrupts play.

use std::fs;
use std::path::Path;

/// High score file, relative to the working directory
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// Load the stored high score, defaulting to 0 on any failure.
pub fn load(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(score) => {
                log::info!("Loaded high score {score}");
                score
            }
            Err(_) => {
                log::warn!("High score file {} is not a number, using 0", path.display());
                0
            }
        },
        Err(_) => {
            log::info!("No high score file, starting fresh");
            0
        }
    }
}

/// Overwrite the stored high score. Best-effort: failures are logged, never
/// surfaced, and in-memory state is unaffected.
pub fn save(path: &Path, score: u32) {
    match fs::write(path, score.to_string()) {
        Ok(()) => log::info!("High score {score} saved"),
        Err(err) => log::warn!("Failed to write high score to {}: {}", path.display(), err),
    }
}
