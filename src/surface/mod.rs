//! Terminal-rendering surfaces that consume a [`TerminalConfig`].
//!
//! The rendering surface itself lives outside this crate. It implements
//! [`TerminalSurface`] and receives the validated configuration once, at
//! setup time, through [`apply`].

pub mod eol;
mod preview;
mod xterm;

pub use eol::{convert_eol, convert_eol_bytes};
pub use preview::AnsiPreview;
pub use xterm::XtermOptions;

use tracing::debug;

use crate::config::TerminalConfig;

/// Something that can be set up from a terminal configuration.
///
/// Implementations read the configuration and never mutate it. The same
/// value may be handed to any number of surfaces.
pub trait TerminalSurface {
    type Error;

    /// Short name used in logs.
    fn surface_name(&self) -> &'static str;

    fn configure(&mut self, config: &TerminalConfig) -> Result<(), Self::Error>;
}

/// Apply a configuration to a surface.
pub fn apply<S: TerminalSurface>(
    config: &TerminalConfig,
    surface: &mut S,
) -> Result<(), S::Error> {
    debug!(
        surface = surface.surface_name(),
        cols = config.cols(),
        rows = config.rows(),
        "applying terminal configuration"
    );
    surface.configure(config)
}
