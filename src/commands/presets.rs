//! Presets subcommands handler

use anyhow::Result;

use termcfg::config::presets;
use termcfg::console::current_theme;

/// List built-in presets with their descriptions.
#[cfg(not(tarpaulin_include))]
pub fn handle_list() -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.accent_text("Built-in presets:"));
    for preset in presets::PRESETS {
        println!(
            "  {:<8} {}",
            preset.name,
            theme.secondary_text(preset.description)
        );
    }
    Ok(())
}

/// Print a preset's TOML source.
///
/// The preset is validated first so a broken preset never gets printed.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(name: &str) -> Result<()> {
    presets::load(name)?;
    if let Some(preset) = presets::find(name) {
        print!("{}", preset.source);
    }
    Ok(())
}
