//! Terminal configuration type definitions

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use super::error::ConfigError;
use super::fields::ConfigFields;

/// A named slot in the terminal palette.
///
/// The set is closed: a theme must assign a color to every role and may not
/// name any other. Declaration order is the canonical order used for
/// validation and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Background,
    Foreground,
    Cursor,
    CursorAccent,
    SelectionBackground,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorRole {
    /// Every role in canonical order.
    pub const ALL: [ColorRole; 21] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Cursor,
        ColorRole::CursorAccent,
        ColorRole::SelectionBackground,
        ColorRole::Black,
        ColorRole::Red,
        ColorRole::Green,
        ColorRole::Yellow,
        ColorRole::Blue,
        ColorRole::Magenta,
        ColorRole::Cyan,
        ColorRole::White,
        ColorRole::BrightBlack,
        ColorRole::BrightRed,
        ColorRole::BrightGreen,
        ColorRole::BrightYellow,
        ColorRole::BrightBlue,
        ColorRole::BrightMagenta,
        ColorRole::BrightCyan,
        ColorRole::BrightWhite,
    ];

    /// Wire name of the role, as it appears in config files.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Cursor => "cursor",
            ColorRole::CursorAccent => "cursorAccent",
            ColorRole::SelectionBackground => "selectionBackground",
            ColorRole::Black => "black",
            ColorRole::Red => "red",
            ColorRole::Green => "green",
            ColorRole::Yellow => "yellow",
            ColorRole::Blue => "blue",
            ColorRole::Magenta => "magenta",
            ColorRole::Cyan => "cyan",
            ColorRole::White => "white",
            ColorRole::BrightBlack => "brightBlack",
            ColorRole::BrightRed => "brightRed",
            ColorRole::BrightGreen => "brightGreen",
            ColorRole::BrightYellow => "brightYellow",
            ColorRole::BrightBlue => "brightBlue",
            ColorRole::BrightMagenta => "brightMagenta",
            ColorRole::BrightCyan => "brightCyan",
            ColorRole::BrightWhite => "brightWhite",
        }
    }

    /// Look up a role by its wire name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.name() == name)
    }

    /// Index into the 16-color ANSI palette, or `None` for the UI roles
    /// (background, foreground, cursor, selection).
    pub fn ansi_index(self) -> Option<u8> {
        Self::ALL[5..]
            .iter()
            .position(|role| *role == self)
            .map(|i| i as u8)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color in `#RRGGBB` form.
///
/// The original spelling is kept so that a validated value serializes back
/// to exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    raw: String,
    rgb: (u8, u8, u8),
}

impl HexColor {
    /// Parse a `#` followed by exactly six hexadecimal digits.
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            raw: value.to_string(),
            rgb: (channel(0)?, channel(2)?, channel(4)?),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A complete palette: every [`ColorRole`] has exactly one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Theme {
    colors: BTreeMap<ColorRole, HexColor>,
}

impl Theme {
    /// Validate a role-name to color-string mapping.
    ///
    /// Unknown role names are reported before missing roles, and color
    /// values are checked last, in canonical role order.
    pub fn from_entries(entries: BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut by_role = BTreeMap::new();
        for (name, value) in entries {
            match ColorRole::from_name(&name) {
                Some(role) => {
                    by_role.insert(role, value);
                }
                None => return Err(ConfigError::UnknownRole { role: name }),
            }
        }

        if let Some(missing) = ColorRole::ALL.iter().find(|r| !by_role.contains_key(r)) {
            return Err(ConfigError::MissingField {
                field: format!("theme.{}", missing),
            });
        }

        let mut colors = BTreeMap::new();
        for (role, value) in by_role {
            match HexColor::parse(&value) {
                Some(color) => {
                    colors.insert(role, color);
                }
                None => return Err(ConfigError::InvalidColor { role, value }),
            }
        }

        Ok(Self { colors })
    }

    pub fn get(&self, role: ColorRole) -> &HexColor {
        &self.colors[&role]
    }

    /// Roles and colors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &HexColor)> {
        self.colors.iter().map(|(role, color)| (*role, color))
    }

    /// Role-name to color-string mapping, the inverse of [`Theme::from_entries`].
    pub fn to_entries(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(role, color)| (role.name().to_string(), color.as_str().to_string()))
            .collect()
    }
}

impl Index<ColorRole> for Theme {
    type Output = HexColor;

    fn index(&self, role: ColorRole) -> &HexColor {
        self.get(role)
    }
}

/// Validated, immutable terminal settings.
///
/// Only [`super::build`] produces values of this type, so every instance
/// upholds the range and palette invariants. The serialized form uses the
/// camelCase field names the rendering surface expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConfigFields")]
pub struct TerminalConfig {
    pub(super) font_family: String,
    pub(super) enable_bold: bool,
    pub(super) cols: u16,
    pub(super) rows: u16,
    pub(super) font_size: f64,
    pub(super) line_height: f64,
    pub(super) letter_spacing: f64,
    pub(super) convert_eol: bool,
    // Last, so TOML output emits the scalar keys before the [theme] table.
    pub(super) theme: Theme,
}

impl TerminalConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn enable_bold(&self) -> bool {
        self.enable_bold
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn letter_spacing(&self) -> f64 {
        self.letter_spacing
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether a bare LF is rendered as CR LF.
    pub fn convert_eol(&self) -> bool {
        self.convert_eol
    }

    /// Grid dimensions as `(cols, rows)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Return a copy sized to a new grid.
    ///
    /// The dimensions go through the same range checks as [`super::build`];
    /// `self` is left untouched.
    pub fn resized(&self, cols: i64, rows: i64) -> Result<Self, ConfigError> {
        let cols = super::fields::grid_dimension("cols", cols)?;
        let rows = super::fields::grid_dimension("rows", rows)?;
        Ok(Self {
            cols,
            rows,
            ..self.clone()
        })
    }
}

impl TryFrom<ConfigFields> for TerminalConfig {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        fields.build()
    }
}
