//! Unit tests for surface module

use termcfg::config::presets;
use termcfg::surface::{apply, convert_eol, AnsiPreview, TerminalSurface, XtermOptions};
use termcfg::TerminalConfig;

use crate::helpers::fixture_path;

/// Records what a rendering surface would be set up with.
#[derive(Default)]
struct RecordingSurface {
    configured: Vec<TerminalConfig>,
}

impl TerminalSurface for RecordingSurface {
    type Error = String;

    fn surface_name(&self) -> &'static str {
        "recording"
    }

    fn configure(&mut self, config: &TerminalConfig) -> Result<(), Self::Error> {
        if config.font_family().is_empty() {
            return Err("font family".to_string());
        }
        self.configured.push(config.clone());
        Ok(())
    }
}

#[test]
fn surface_receives_config_unchanged() {
    let config = TerminalConfig::load_from(&fixture_path("valid.toml")).unwrap();
    let mut surface = RecordingSurface::default();
    apply(&config, &mut surface).unwrap();
    apply(&config, &mut surface).unwrap();
    assert_eq!(surface.configured, vec![config.clone(), config]);
}

#[test]
fn xterm_options_match_serialized_config() {
    let config = presets::load("vga").unwrap();
    let mut options = XtermOptions::new();
    apply(&config, &mut options).unwrap();
    assert_eq!(
        options.options().unwrap(),
        serde_json::to_value(&config).unwrap()
    );
}

#[test]
fn xterm_json_is_valid_config_input() {
    let config = presets::load("amber").unwrap();
    let mut options = XtermOptions::new();
    apply(&config, &mut options).unwrap();
    let json = options.to_json_pretty().unwrap();
    let reparsed: TerminalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn preview_writes_to_any_writer() {
    let config = TerminalConfig::load_from(&fixture_path("valid.json")).unwrap();
    let mut preview = AnsiPreview::new(Vec::new(), false);
    apply(&config, &mut preview).unwrap();
    let out = String::from_utf8(preview.into_inner()).unwrap();
    assert!(out.starts_with("monospace @ 13px"));
    assert!(out.contains("selectionBackground"));
    assert!(out.contains("#585B70"));
}

#[test]
fn convert_eol_is_exported() {
    assert_eq!(convert_eol("$ ls\nREADME.md\n"), "$ ls\r\nREADME.md\r\n");
}
