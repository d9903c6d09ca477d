//! CLI definitions for termcfg
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our console colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termcfg")]
#[command(about = "Validate and export terminal-emulator configuration")]
#[command(
    long_about = "termcfg - validated configuration for terminal-emulator widgets.

A configuration sets the font, grid size, color palette and line-ending
behavior of a terminal surface such as xterm.js. Every key is required and
every palette role must be a #RRGGBB color; termcfg rejects anything else
before it reaches the surface.

QUICK START:
    termcfg presets show amber > ~/.config/termcfg/terminal.toml
    termcfg check                  Validate the default config
    termcfg export                 Print xterm.js options as JSON
    termcfg preview                Show the palette in truecolor

By default the config is read from ~/.config/termcfg/terminal.toml."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read a configuration from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Config file (.toml or .json); defaults to ~/.config/termcfg/terminal.toml
    #[arg(help = "Config file (.toml or .json); defaults to ~/.config/termcfg/terminal.toml")]
    pub file: Option<PathBuf>,

    /// Use a built-in preset instead of a file
    #[arg(long, conflicts_with = "file", help = "Use a built-in preset instead of a file")]
    pub preset: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration
    #[command(long_about = "Validate a configuration file.

Prints OK on success. On failure, prints which field, role or value is
invalid and exits with status 1. Also warns when the current terminal is
smaller than the configured grid.

EXAMPLES:
    termcfg check                        Check the default config
    termcfg check ./terminal.json        Check a JSON file
    termcfg check --preset vga           Check a built-in preset")]
    Check(ConfigSource),

    /// Print a configuration as annotated TOML
    #[command(long_about = "Print the validated configuration as TOML.

Each key is preceded by a comment describing it.

EXAMPLES:
    termcfg show
    termcfg show --preset amber")]
    Show(ConfigSource),

    /// Export terminal options for a rendering surface
    #[command(long_about = "Export the validated configuration for a rendering surface.

The JSON format is the options object accepted by the xterm.js Terminal
constructor. The TOML format is the canonical config file form.

EXAMPLES:
    termcfg export                       xterm.js options as JSON
    termcfg export --format toml         Canonical TOML
    termcfg export --preset amber > options.json")]
    Export {
        #[command(flatten)]
        source: ConfigSource,
        /// Output format
        #[arg(long, short, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Preview the palette in truecolor
    #[command(long_about = "Render the configuration's palette in the current terminal.

Each color role is shown as a 24-bit color swatch, followed by sample
text in the theme's foreground and background. Lines end in CR LF when
convertEol is enabled.

EXAMPLES:
    termcfg preview
    termcfg preview --preset vga
    termcfg preview --no-color           Names and hex values only")]
    Preview {
        #[command(flatten)]
        source: ConfigSource,
        /// Print names and values without color swatches
        #[arg(long)]
        no_color: bool,
    },

    /// List and show built-in presets
    #[command(subcommand)]
    Presets(PresetCommands),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List built-in presets
    List,
    /// Print a preset as TOML
    #[command(long_about = "Print a built-in preset as TOML.

The output is a complete config file and can be saved and edited.

EXAMPLE:
    termcfg presets show amber > ~/.config/termcfg/terminal.toml")]
    Show {
        /// Preset name
        #[arg(help = "Preset name (see `termcfg presets list`)")]
        name: String,
    },
}

/// Output format for `termcfg export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// xterm.js options object
    Json,
    /// Canonical TOML config
    Toml,
}
