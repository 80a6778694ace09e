//! booklet-tui entry point
//!
//! Usage: `booklet-tui [manifest.toml]`
//!
//! The manifest defaults to `booklet.toml` in the current directory.
//! Relative page locators resolve next to the manifest. Logs go to
//! `booklet-tui.log` (stdout belongs to the UI); set `BOOKLET_LOG` to
//! adjust the filter.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use booklet_core::BookletManifest;
use booklet_tui::app::App;
use booklet_tui::fullscreen;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let manifest_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "booklet.toml".to_string()),
    );
    let manifest = BookletManifest::from_path(&manifest_path)
        .with_context(|| format!("loading manifest {}", manifest_path.display()))?;
    let fragment_root = manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // Probe the fullscreen capability before the terminal goes raw.
    let port = fullscreen::probe_port();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(manifest, fragment_root, port);
    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even when the loop errored.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_tracing() -> anyhow::Result<()> {
    let file = File::create("booklet-tui.log").context("creating log file")?;
    let filter = EnvFilter::try_from_env("BOOKLET_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
