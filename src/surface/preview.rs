//! Truecolor palette preview.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use super::eol::convert_eol;
use super::TerminalSurface;
use crate::config::{ColorRole, HexColor, TerminalConfig};

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog\n0123456789 ~!@#$%^&*()\n";
const SWATCH: &str = "      ";

/// Renders a configuration as a palette listing on a writer.
///
/// With color enabled, each role gets a truecolor swatch and a sample text
/// block is drawn in the theme's foreground and background. Newlines are
/// written as CR LF when the configuration asks for it.
pub struct AnsiPreview<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> AnsiPreview<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str, convert: bool) -> io::Result<()> {
        let text = format!("{}\n", text);
        if convert {
            self.writer.write_all(convert_eol(&text).as_bytes())
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    fn swatch(&mut self, role: ColorRole, color: &HexColor, convert: bool) -> io::Result<()> {
        if self.color {
            queue!(
                self.writer,
                Print("  "),
                SetBackgroundColor(to_crossterm(color)),
                Print(SWATCH),
                ResetColor
            )?;
            self.line(&format!(" {:<20} {}", role.name(), color), convert)
        } else {
            self.line(&format!("  {:<20} {}", role.name(), color), convert)
        }
    }
}

impl<W: Write> TerminalSurface for AnsiPreview<W> {
    type Error = io::Error;

    fn surface_name(&self) -> &'static str {
        "ansi-preview"
    }

    fn configure(&mut self, config: &TerminalConfig) -> io::Result<()> {
        let convert = config.convert_eol();

        self.line(
            &format!(
                "{} @ {}px, line height {}, letter spacing {}",
                config.font_family(),
                config.font_size(),
                config.line_height(),
                config.letter_spacing()
            ),
            convert,
        )?;
        self.line(
            &format!(
                "grid {}x{}, bold {}, convertEol {}",
                config.cols(),
                config.rows(),
                on_off(config.enable_bold()),
                on_off(convert)
            ),
            convert,
        )?;
        self.line("", convert)?;

        for (role, color) in config.theme().iter() {
            self.swatch(role, color, convert)?;
        }
        self.line("", convert)?;

        let theme = config.theme();
        if self.color {
            queue!(
                self.writer,
                SetForegroundColor(to_crossterm(&theme[ColorRole::Foreground])),
                SetBackgroundColor(to_crossterm(&theme[ColorRole::Background]))
            )?;
        }
        let sample = if convert {
            convert_eol(SAMPLE_TEXT)
        } else {
            SAMPLE_TEXT.into()
        };
        self.writer.write_all(sample.as_bytes())?;
        if self.color {
            queue!(self.writer, ResetColor)?;
        }

        self.writer.flush()
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn to_crossterm(color: &HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}
