//! Terminal presentation
//!
//! Draws the per-tick [`Frame`] snapshot onto a character-cell canvas and
//! flushes it with queued crossterm commands. World coordinates are mapped
//! onto the terminal grid each frame, so any window size works. Nothing in
//! here mutates simulation state.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::config::GameConfig;
use crate::sim::{Frame, GamePhase};

const PIPE_COLOR: Color = Color::Green;
const BIRD_COLOR: Color = Color::Cyan;
const TEXT_COLOR: Color = Color::White;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Character-cell canvas sized to the terminal
pub struct Screen {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Screen {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![EMPTY; cols as usize * rows as usize];
    }

    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn set(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32 {
            self.cells[row as usize * self.cols as usize + col as usize] = Cell { ch, color };
        }
    }

    fn fill_rect(&mut self, col: i32, row: i32, w: i32, h: i32, ch: char, color: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(col + dx, row + dy, ch, color);
            }
        }
    }

    fn text(&mut self, col: i32, row: i32, s: &str, color: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(col + i as i32, row, ch, color);
        }
    }

    fn text_centered(&mut self, row: i32, s: &str, color: Color) {
        let col = (self.cols as i32 - s.chars().count() as i32) / 2;
        self.text(col, row, s, color);
    }

    /// Map a world position onto the cell grid
    fn project(&self, config: &GameConfig, x: f32, y: f32) -> (i32, i32) {
        let col = x / config.width * self.cols as f32;
        let row = y / config.height * self.rows as f32;
        (col as i32, row as i32)
    }

    /// Redraw the canvas from a frame snapshot.
    pub fn draw(&mut self, frame: &Frame, config: &GameConfig) {
        self.clear();

        match frame.phase {
            GamePhase::Menu => self.draw_menu(frame),
            GamePhase::Playing => {
                self.draw_pipes(frame, config);
                self.draw_bird(frame, config);
                self.draw_hud(frame);
            }
            GamePhase::GameOver => {
                self.draw_pipes(frame, config);
                self.draw_bird(frame, config);
                self.draw_game_over(frame);
            }
            GamePhase::Exiting => {}
        }
    }

    fn draw_pipes(&mut self, frame: &Frame, config: &GameConfig) {
        for pipe in &frame.pipes {
            let (left, _) = self.project(config, pipe.x, 0.0);
            let (right, _) = self.project(config, pipe.x + pipe.width, 0.0);
            let (_, gap_top_row) = self.project(config, 0.0, pipe.gap_top);
            let (_, gap_bottom_row) = self.project(config, 0.0, pipe.gap_bottom);
            let w = (right - left).max(1);

            self.fill_rect(left, 0, w, gap_top_row, '█', PIPE_COLOR);
            self.fill_rect(
                left,
                gap_bottom_row,
                w,
                self.rows as i32 - gap_bottom_row,
                '█',
                PIPE_COLOR,
            );
        }
    }

    fn draw_bird(&mut self, frame: &Frame, config: &GameConfig) {
        let (col, row) = self.project(config, frame.bird_pos.x, frame.bird_pos.y);
        self.set(col, row, '@', BIRD_COLOR);
        self.set(col - 1, row, '<', BIRD_COLOR);
    }

    fn draw_hud(&mut self, frame: &Frame) {
        self.text(1, 0, &format!("Score: {}", frame.score), TEXT_COLOR);
    }

    fn draw_menu(&mut self, frame: &Frame) {
        let third = self.rows as i32 / 3;
        self.text_centered(third, "G A P W I N G", BIRD_COLOR);
        self.text_centered(third + 2, "Press SPACE to start", TEXT_COLOR);
        self.text_centered(third + 4, "Press ESC to quit", TEXT_COLOR);
        if frame.high_score > 0 {
            self.text_centered(
                third + 6,
                &format!("High Score: {}", frame.high_score),
                TEXT_COLOR,
            );
        }
    }

    fn draw_game_over(&mut self, frame: &Frame) {
        let third = self.rows as i32 / 3;
        self.text_centered(third, "Game Over", BIRD_COLOR);
        self.text_centered(third + 2, &format!("Score: {}", frame.score), TEXT_COLOR);
        self.text_centered(
            third + 3,
            &format!("High Score: {}", frame.high_score),
            TEXT_COLOR,
        );
        self.text_centered(third + 5, "Press SPACE to play again", TEXT_COLOR);
        self.text_centered(third + 6, "Press ESC to quit", TEXT_COLOR);
    }

    /// Flush the canvas to the terminal, batching color changes.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let mut current = Color::Reset;
        queue!(out, style::SetForegroundColor(current))?;

        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.color != current {
                    queue!(out, style::SetForegroundColor(cell.color))?;
                    current = cell.color;
                }
                queue!(out, style::Print(cell.ch))?;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}
