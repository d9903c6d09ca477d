//! Export command handler

use anyhow::{Context, Result};

use termcfg::cli::{ConfigSource, ExportFormat};
use termcfg::config::{io, TerminalConfig};
use termcfg::surface::{apply, XtermOptions};

/// Print a configuration in the requested export format.
#[cfg(not(tarpaulin_include))]
pub fn handle(source: &ConfigSource, format: ExportFormat) -> Result<()> {
    let config = super::load(source)?;
    println!("{}", render(&config, format)?);
    Ok(())
}

/// Render a configuration for export.
pub fn render(config: &TerminalConfig, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut options = XtermOptions::new();
            apply(config, &mut options).context("Failed to build xterm.js options")?;
            Ok(options.to_json_pretty()?)
        }
        ExportFormat::Toml => Ok(io::to_string(config, io::Format::Toml)?
            .trim_end()
            .to_string()),
    }
}
