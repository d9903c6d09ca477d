//! Show command handler

use anyhow::{Context, Result};

use termcfg::cli::ConfigSource;
use termcfg::config::{docs, io};
use termcfg::console::current_theme;

/// Show a configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle(source: &ConfigSource) -> Result<()> {
    let config = super::load(source)?;
    let toml_str = io::to_string(&config, io::Format::Toml)?;
    let annotated =
        docs::annotate_config(&toml_str).context("Failed to annotate configuration")?;
    let theme = current_theme();
    print!("{}", theme.primary_text(&annotated));
    Ok(())
}
