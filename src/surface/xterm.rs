//! xterm.js options export.

use std::convert::Infallible;

use serde_json::Value;

use super::TerminalSurface;
use crate::config::TerminalConfig;

/// Collects the options object passed to an xterm.js `Terminal` constructor.
///
/// The field names and the `#RRGGBB` theme strings are exactly what
/// xterm.js accepts, so the JSON can be handed over as-is. Keys keep the
/// configuration's field order and the palette's canonical role order.
#[derive(Debug, Default)]
pub struct XtermOptions {
    config: Option<TerminalConfig>,
}

impl XtermOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options object; `null` until configured.
    pub fn options(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.config)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.config)
    }
}

impl TerminalSurface for XtermOptions {
    type Error = Infallible;

    fn surface_name(&self) -> &'static str {
        "xterm"
    }

    fn configure(&mut self, config: &TerminalConfig) -> Result<(), Self::Error> {
        self.config = Some(config.clone());
        Ok(())
    }
}
