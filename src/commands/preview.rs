//! Preview command handler

use anyhow::{Context, Result};
use std::io;

use termcfg::cli::ConfigSource;
use termcfg::console::colors_enabled;
use termcfg::surface::{apply, AnsiPreview};

/// Render the palette preview to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(source: &ConfigSource, no_color: bool) -> Result<()> {
    let config = super::load(source)?;
    let stdout = io::stdout();
    let mut preview = AnsiPreview::new(stdout.lock(), !no_color && colors_enabled());
    apply(&config, &mut preview).context("Failed to write preview")?;
    Ok(())
}
