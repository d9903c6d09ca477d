//! Built-in configurations shipped with the binary.
//!
//! Presets are ordinary TOML documents and go through the same validation
//! as user files.

use std::path::Path;

use super::error::LoadError;
use super::io::{self, Format};
use super::types::TerminalConfig;

/// A named, embedded configuration.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

/// All presets, in display order.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "amber",
        description: "Amber phosphor on black, 80x40, \"Press Start 2P\"",
        source: include_str!("presets/amber.toml"),
    },
    Preset {
        name: "vga",
        description: "Standard VGA text-mode palette, 80x25",
        source: include_str!("presets/vga.toml"),
    },
];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name).collect()
}

impl Preset {
    pub fn load(&self) -> Result<TerminalConfig, LoadError> {
        let origin = format!("<preset:{}>", self.name);
        io::from_str(self.source, Format::Toml, Path::new(&origin))
    }
}

/// Load a preset by name.
pub fn load(name: &str) -> Result<TerminalConfig, LoadError> {
    let preset = find(name).ok_or_else(|| LoadError::UnknownPreset {
        name: name.to_string(),
        available: names().join(", "),
    })?;
    preset.load()
}
