//! Range slider TUI: a mouse-driven price filter over a small catalogue.
//!
//! Drag either thumb with the left button; `r` resets to the configured
//! selection and `q` quits. The selection is restored on the next start.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use rangeslider_core::SliderConfig;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_terminal(&mut io::stderr());
        default_hook(info);
    }));

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangeslider");
    let config_path = config_dir.join("slider.toml");
    let state_path = config_dir.join("state.json");

    init_logging(&config_dir.join("rangeslider.log"))?;

    let config = load_config(&config_path)?;
    let persisted = persistence::load(&state_path);

    let mut app = AppState::new(config, state_path)?;
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    if let Err(e) = persistence::save(&app.state_path, &persisted) {
        tracing::warn!(error = %e, "failed to save selection");
    }

    // Restore terminal
    disable_raw_mode()?;
    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result
}

/// Undo everything `main` enabled on entry. Shared by the panic hook and the
/// normal exit path.
fn leave_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen)
}

/// Log to a file; the terminal belongs to the UI. `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// `slider.toml` if present, otherwise the built-in price filter.
fn load_config(path: &Path) -> Result<SliderConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no slider config, using defaults");
        return Ok(app::default_price_filter());
    }
    SliderConfig::load(path).with_context(|| format!("loading {}", path.display()))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, tracking where the slider landed so mouse cells map to it
        terminal.draw(|f| {
            app.layout(ui::slider_area(f.area()));
            ui::draw(f, app);
        })?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::FocusLost => input::handle_focus_lost(app),
                _ => {}
            }
        }

        // 3. Collect valueChanged notifications raised by the input
        if let Some(selection) = app.drain_changes() {
            tracing::trace!(lower = selection.lower, upper = selection.upper, "selection changed");
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
