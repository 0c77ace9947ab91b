//! Gapwing entry point
//!
//! Terminal setup, the fixed-rate loop, and the glue between input events,
//! the simulation, and persistence. The simulation itself never touches the
//! terminal or the filesystem; everything it needs crosses this boundary as
//! a `TickInput` going in and `GameEvent`s coming out.

use std::io::{self, stdout};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};

use gapwing::config::GameConfig;
use gapwing::highscore;
use gapwing::render::Screen;
use gapwing::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() -> io::Result<()> {
    env_logger::init();

    let config = GameConfig::load_or_default(Path::new(GameConfig::TUNING_FILE));
    if let Err(err) = config.validate() {
        // Fatal startup precondition; report once and bail
        eprintln!("gapwing: invalid tuning: {err}");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
    }

    let highscore_path = Path::new(highscore::HIGHSCORE_FILE);
    let high_score = highscore::load(highscore_path);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let mut state = GameState::new(&config, seed, high_score);
    log::info!("Session seed {seed}");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    };

    let result = run(&mut out, &config, &mut state, highscore_path);
    cleanup(&mut out)?;
    result
}

/// The fixed-rate loop: drain input, tick, handle events, draw, pace.
fn run(
    out: &mut io::Stdout,
    config: &GameConfig,
    state: &mut GameState,
    highscore_path: &Path,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut screen = Screen::new(cols, rows);
    let tick_dur = Duration::from_secs_f64(1.0 / config.tick_rate as f64);

    loop {
        let tick_start = Instant::now();

        // Drain every pending input event before the simulation advances.
        // Space doubles as flap and confirm; the current phase decides
        // which one applies.
        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        input.flap = true;
                        input.confirm = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => input.quit = true,
                    _ => {}
                },
                Event::Resize(c, r) => screen.resize(c, r),
                _ => {}
            }
        }

        for event in tick(state, config, &input) {
            match event {
                GameEvent::Scored { .. } => {}
                GameEvent::GameOver { score } => log::info!("Round over, score {score}"),
                GameEvent::NewHighScore(score) => highscore::save(highscore_path, score),
            }
        }

        if state.phase == GamePhase::Exiting {
            return Ok(());
        }

        screen.draw(&state.frame(config), config);
        screen.render(out)?;

        // Frame pacing: the sleep below is the only time-based gate
        let elapsed = tick_start.elapsed();
        if elapsed < tick_dur {
            std::thread::sleep(tick_dur - elapsed);
        }
    }
}
