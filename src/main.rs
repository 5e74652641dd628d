//! fishbowl - terminal frontend
//!
//! Describe it. Act it. One word.

mod tui;

use crossterm::event::{self, Event, KeyEventKind};
use fishbowl::{GameConfig, GameCoordinator};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tui::{BellCues, Frontend, Tui};

fn main() -> io::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, config_error) = match GameConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };

    if let Some(path) = &config.log_file {
        setup_logging(path)?;
    }
    if let Some(e) = config_error {
        warn!("using default config: {}", e);
    }
    info!(turn_duration = config.turn_duration_secs, "starting");

    let game = GameCoordinator::new(&config).with_observer(BellCues);
    let mut frontend = Frontend::new(game);

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Main event loop
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, &frontend))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    frontend.on_key(key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            frontend.tick();
            last_tick = Instant::now();
        }

        if frontend.should_quit {
            break;
        }
    }

    info!("bye");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Send logs to a file so they don't draw over the UI
fn setup_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
