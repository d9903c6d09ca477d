//! Configuration I/O operations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::LoadError;
use super::fields::ConfigFields;
use super::types::TerminalConfig;

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick a format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Get the config file path (~/.config/termcfg/terminal.toml)
pub fn config_path() -> Result<PathBuf, LoadError> {
    Ok(config_dir()?.join("terminal.toml"))
}

/// Get the config directory path (~/.config/termcfg)
pub fn config_dir() -> Result<PathBuf, LoadError> {
    let home = dirs::home_dir().ok_or(LoadError::NoHomeDir)?;
    Ok(home.join(".config").join("termcfg"))
}

/// Parse raw fields without validating them.
pub fn parse_fields(contents: &str, format: Format) -> Result<ConfigFields, String> {
    match format {
        Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    }
}

/// Parse and validate configuration text.
///
/// `origin` only labels errors; nothing is read from it.
pub fn from_str(
    contents: &str,
    format: Format,
    origin: &Path,
) -> Result<TerminalConfig, LoadError> {
    let fields = parse_fields(contents, format).map_err(|message| LoadError::Parse {
        path: origin.to_path_buf(),
        message,
    })?;
    fields.build().map_err(|source| LoadError::Invalid {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load and validate the configuration at `path`.
pub fn load_from(path: &Path) -> Result<TerminalConfig, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "loading terminal configuration");
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&contents, Format::from_path(path), path)
}

/// Load the configuration from the default location.
///
/// A missing file is an error: there is no built-in fallback.
pub fn load() -> Result<TerminalConfig, LoadError> {
    load_from(&config_path()?)
}

/// Serialize a validated configuration.
pub fn to_string(config: &TerminalConfig, format: Format) -> Result<String, LoadError> {
    match format {
        Format::Toml => {
            toml::to_string_pretty(config).map_err(|e| LoadError::Serialize(e.to_string()))
        }
        Format::Json => {
            serde_json::to_string_pretty(config).map_err(|e| LoadError::Serialize(e.to_string()))
        }
    }
}

/// Save a configuration to `path`, creating parent directories as needed.
pub fn save_to(config: &TerminalConfig, path: &Path) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoadError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = to_string(config, Format::from_path(path))?;
    fs::write(path, contents).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "saved terminal configuration");

    Ok(())
}
