//! Command handlers for the termcfg CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod check;
pub mod completions;
pub mod export;
pub mod presets;
pub mod preview;
pub mod show;

use anyhow::{Context, Result};
use std::path::PathBuf;

use termcfg::cli::ConfigSource;
use termcfg::config::presets as builtin;
use termcfg::TerminalConfig;

/// Human-readable label for where a config came from.
pub fn source_label(source: &ConfigSource) -> Result<String> {
    if let Some(name) = &source.preset {
        return Ok(format!("preset '{}'", name));
    }
    Ok(resolve_path(source)?.display().to_string())
}

/// The file a source refers to, falling back to the default config path.
pub fn resolve_path(source: &ConfigSource) -> Result<PathBuf> {
    match &source.file {
        Some(path) => Ok(path.clone()),
        None => TerminalConfig::config_path().context("Could not locate default config file"),
    }
}

/// Load and validate the configuration a source refers to.
pub fn load(source: &ConfigSource) -> Result<TerminalConfig> {
    if let Some(name) = &source.preset {
        return Ok(builtin::load(name)?);
    }
    let path = resolve_path(source)?;
    Ok(TerminalConfig::load_from(&path)?)
}
