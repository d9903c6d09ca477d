//! Raw configuration input and the validating builder.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::{TerminalConfig, Theme};

/// Unvalidated configuration as read from a file or assembled in code.
///
/// Every field is optional so that a missing key is reported by [`build`]
/// rather than by the parser. Numbers are wide for the same reason: a
/// negative row count must reach range validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFields {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub enable_bold: Option<bool>,
    #[serde(default)]
    pub cols: Option<i64>,
    #[serde(default)]
    pub rows: Option<i64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub line_height: Option<f64>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub theme: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub convert_eol: Option<bool>,
    /// Top-level keys that are not part of the configuration.
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl ConfigFields {
    /// Validate and freeze. See [`build`].
    pub fn build(self) -> Result<TerminalConfig, ConfigError> {
        build(self)
    }
}

impl From<&TerminalConfig> for ConfigFields {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            font_family: Some(config.font_family.clone()),
            enable_bold: Some(config.enable_bold),
            cols: Some(i64::from(config.cols)),
            rows: Some(i64::from(config.rows)),
            font_size: Some(config.font_size),
            line_height: Some(config.line_height),
            letter_spacing: Some(config.letter_spacing),
            theme: Some(config.theme.to_entries()),
            convert_eol: Some(config.convert_eol),
            unrecognized: BTreeMap::new(),
        }
    }
}

/// Build a [`TerminalConfig`] from raw fields.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. every top-level key is present
/// 2. `fontFamily` is non-empty; `cols`, `rows` and `fontSize` are positive
/// 3. `lineHeight` and `letterSpacing` are non-negative
/// 4. the theme names exactly the known roles
/// 5. every theme color is `#RRGGBB`
pub fn build(fields: ConfigFields) -> Result<TerminalConfig, ConfigError> {
    let ConfigFields {
        font_family,
        enable_bold,
        cols,
        rows,
        font_size,
        line_height,
        letter_spacing,
        theme,
        convert_eol,
        unrecognized,
    } = fields;

    for key in unrecognized.keys() {
        warn!(key = %key, "ignoring unrecognized configuration key");
    }

    let font_family = required(font_family, "fontFamily")?;
    let enable_bold = required(enable_bold, "enableBold")?;
    let cols = required(cols, "cols")?;
    let rows = required(rows, "rows")?;
    let font_size = required(font_size, "fontSize")?;
    let line_height = required(line_height, "lineHeight")?;
    let letter_spacing = required(letter_spacing, "letterSpacing")?;
    let theme = required(theme, "theme")?;
    let convert_eol = required(convert_eol, "convertEol")?;

    if font_family.trim().is_empty() {
        return Err(out_of_range("fontFamily", format!("{:?}", font_family)));
    }
    let cols = grid_dimension("cols", cols)?;
    let rows = grid_dimension("rows", rows)?;
    if !(font_size.is_finite() && font_size > 0.0) {
        return Err(out_of_range("fontSize", font_size));
    }

    non_negative("lineHeight", line_height)?;
    non_negative("letterSpacing", letter_spacing)?;

    let theme = Theme::from_entries(theme)?;

    debug!(
        font_family = %font_family,
        cols,
        rows,
        font_size,
        "terminal configuration validated"
    );

    Ok(TerminalConfig {
        font_family,
        enable_bold,
        cols,
        rows,
        font_size,
        line_height,
        letter_spacing,
        convert_eol,
        theme,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField {
        field: field.to_string(),
    })
}

fn out_of_range(field: &str, value: impl ToString) -> ConfigError {
    ConfigError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// A grid dimension must be at least 1 and fit the surface's `u16` grid.
pub(super) fn grid_dimension(field: &str, value: i64) -> Result<u16, ConfigError> {
    match u16::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(out_of_range(field, value)),
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, value))
    }
}
