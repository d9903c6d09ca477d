//! Configuration errors.

use std::path::PathBuf;

use super::types::ColorRole;

/// Validation failure while building a [`super::TerminalConfig`].
///
/// Every variant names the offending field or role so the caller can report
/// exactly what to fix. None of them is recoverable: no partial configuration
/// is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("`{field}` is out of range: {value}")]
    OutOfRange { field: String, value: String },

    #[error("invalid color for `theme.{role}`: {value:?} (expected #RRGGBB)")]
    InvalidColor { role: ColorRole, value: String },

    #[error("unknown theme role `{role}`")]
    UnknownRole { role: String },
}

impl ConfigError {
    /// Dotted path of the field the error refers to, e.g. `theme.cursor`.
    pub fn field(&self) -> String {
        match self {
            ConfigError::MissingField { field } | ConfigError::OutOfRange { field, .. } => {
                field.clone()
            }
            ConfigError::InvalidColor { role, .. } => format!("theme.{}", role),
            ConfigError::UnknownRole { role } => format!("theme.{}", role),
        }
    }
}

/// Failure while loading or saving a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("unknown preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("could not determine home directory")]
    NoHomeDir,
}

impl LoadError {
    /// The validation error, if this failure came from [`super::build`].
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            LoadError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}
