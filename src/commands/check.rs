//! Check command handler

use anyhow::Result;
use tracing::debug;

use termcfg::cli::ConfigSource;
use termcfg::console::current_theme;

use super::{load, source_label};

/// Validate a configuration and report the result.
///
/// Validation failures propagate to main, which prints them and exits 1.
#[cfg(not(tarpaulin_include))]
pub fn handle(source: &ConfigSource) -> Result<()> {
    let theme = current_theme();
    let label = source_label(source)?;
    let config = load(source)?;

    println!("{} {}", theme.success_text("OK"), theme.secondary_text(&label));

    let current = terminal_size::terminal_size().map(|(w, h)| (w.0, h.0));
    if let Some(message) = size_warning(config.dimensions(), current) {
        debug!(%message, "configured grid exceeds current terminal");
        println!("{}", theme.warning_text(&message));
    }

    Ok(())
}

/// Warn when the configured grid does not fit the current terminal.
///
/// Returns `None` when it fits or when there is no terminal to measure.
pub fn size_warning(grid: (u16, u16), current: Option<(u16, u16)>) -> Option<String> {
    let (cols, rows) = grid;
    let (width, height) = current?;
    if cols <= width && rows <= height {
        return None;
    }
    Some(format!(
        "Note: grid is {}x{} but this terminal is {}x{}",
        cols, rows, width, height
    ))
}
