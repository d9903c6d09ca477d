//! Terminal configuration: types, validation, and file handling

pub mod docs;
mod error;
mod fields;
pub mod io;
pub mod presets;
mod types;

pub use error::{ConfigError, LoadError};
pub use fields::{build, ConfigFields};
pub use types::{ColorRole, HexColor, TerminalConfig, Theme};

use std::path::{Path, PathBuf};

impl TerminalConfig {
    /// Get the config file path (~/.config/termcfg/terminal.toml)
    pub fn config_path() -> Result<PathBuf, LoadError> {
        io::config_path()
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self, LoadError> {
        io::load()
    }

    /// Load configuration from a TOML or JSON file.
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        io::load_from(path)
    }

    /// Save configuration to a TOML or JSON file.
    pub fn save_to(&self, path: &Path) -> Result<(), LoadError> {
        io::save_to(self, path)
    }
}
