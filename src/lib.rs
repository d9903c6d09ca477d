//! termcfg library
//!
//! Validated configuration for terminal-emulator widgets: font, grid size,
//! color palette and line-ending behavior, plus the seam through which a
//! rendering surface receives it.

pub mod cli;
pub mod config;
pub mod console;
pub mod surface;

pub use config::{
    build, ColorRole, ConfigError, ConfigFields, HexColor, LoadError, TerminalConfig, Theme,
};
pub use surface::{apply, TerminalSurface};
