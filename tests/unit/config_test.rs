//! Unit tests for config module

use std::collections::BTreeMap;

use termcfg::config::io::{self, Format};
use termcfg::config::presets;
use termcfg::{build, ColorRole, ConfigError, ConfigFields, LoadError, TerminalConfig};

use crate::helpers::{amber_theme, fixture_path, load_fixture, monospace_fields, temp_fixture};

#[test]
fn monospace_scenario_builds_identical_structure() {
    let fields = monospace_fields();
    let config = build(fields.clone()).unwrap();

    assert_eq!(config.font_family(), "monospace");
    assert!(config.enable_bold());
    assert_eq!(config.cols(), 80);
    assert_eq!(config.rows(), 40);
    assert_eq!(config.font_size(), 13.0);
    assert_eq!(config.line_height(), 1.7);
    assert_eq!(config.letter_spacing(), 1.5);
    assert!(config.convert_eol());
    assert_eq!(config.theme().to_entries(), amber_theme());
    assert_eq!(ConfigFields::from(&config), fields);
}

#[test]
fn omitted_background_is_missing_field() {
    let mut fields = monospace_fields();
    fields.theme.as_mut().unwrap().remove("background");
    assert_eq!(
        build(fields).unwrap_err(),
        ConfigError::MissingField {
            field: "theme.background".to_string()
        }
    );
}

#[test]
fn each_missing_role_is_named() {
    for role in ColorRole::ALL {
        let mut fields = monospace_fields();
        fields.theme.as_mut().unwrap().remove(role.name());
        let err = build(fields).unwrap_err();
        assert_eq!(err.field(), format!("theme.{}", role));
        assert!(matches!(err, ConfigError::MissingField { .. }));
    }
}

#[test]
fn empty_theme_reports_first_role() {
    let mut fields = monospace_fields();
    fields.theme = Some(BTreeMap::new());
    assert_eq!(
        build(fields).unwrap_err(),
        ConfigError::MissingField {
            field: "theme.background".to_string()
        }
    );
}

#[test]
fn json_roundtrip_is_idempotent() {
    let config = build(monospace_fields()).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let reparsed: ConfigFields = serde_json::from_str(&json).unwrap();
    let rebuilt = build(reparsed).unwrap();
    assert_eq!(rebuilt, config);
    assert_eq!(serde_json::to_string(&rebuilt).unwrap(), json);
}

#[test]
fn toml_roundtrip_is_idempotent() {
    let config = presets::load("amber").unwrap();
    let toml_str = toml::to_string(&config).unwrap();
    let rebuilt: TerminalConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(rebuilt, config);
}

#[test]
fn deserializing_terminal_config_validates() {
    let json = load_fixture("negative_rows.json");
    let err = serde_json::from_str::<TerminalConfig>(&json).unwrap_err();
    assert!(err.to_string().contains("`rows` is out of range: -1"));
}

#[test]
fn serialized_form_uses_camel_case_keys() {
    let config = build(monospace_fields()).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for key in [
        "fontFamily",
        "enableBold",
        "cols",
        "rows",
        "fontSize",
        "lineHeight",
        "letterSpacing",
        "theme",
        "convertEol",
    ] {
        assert!(keys.contains(&key), "missing {}", key);
    }
    assert_eq!(keys.len(), 9);
}

#[test]
fn toml_and_json_fixtures_agree() {
    let from_toml = io::load_from(&fixture_path("valid.toml")).unwrap();
    let from_json = io::load_from(&fixture_path("valid.json")).unwrap();
    assert_eq!(from_toml, from_json);
}

#[test]
fn fixture_errors_match_expected_kinds() {
    let cases = [
        (
            "missing_background.toml",
            ConfigError::MissingField {
                field: "theme.background".to_string(),
            },
        ),
        (
            "bad_color.toml",
            ConfigError::InvalidColor {
                role: ColorRole::BrightCyan,
                value: "#FFF".to_string(),
            },
        ),
        (
            "zero_cols.toml",
            ConfigError::OutOfRange {
                field: "cols".to_string(),
                value: "0".to_string(),
            },
        ),
        (
            "unknown_role.toml",
            ConfigError::UnknownRole {
                role: "orange".to_string(),
            },
        ),
        (
            "negative_rows.json",
            ConfigError::OutOfRange {
                field: "rows".to_string(),
                value: "-1".to_string(),
            },
        ),
    ];
    for (name, expected) in cases {
        let err = io::load_from(&fixture_path(name)).unwrap_err();
        assert_eq!(err.config_error(), Some(&expected), "fixture {}", name);
    }
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let contents = format!("cursorBlink = true\n{}", load_fixture("valid.toml"));
    let config = io::from_str(&contents, Format::Toml, &fixture_path("inline.toml")).unwrap();
    assert_eq!(config.cols(), 80);
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let contents = load_fixture("valid.toml").replace("cols = 80", "cols = \"80\"");
    let err = io::from_str(&contents, Format::Toml, &fixture_path("inline.toml")).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn save_to_writes_loadable_file() {
    let (temp, path) = temp_fixture("valid.toml");
    let config = TerminalConfig::load_from(&path).unwrap();
    let resized = config.resized(132, 43).unwrap();

    let out = temp.path().join("out").join("terminal.json");
    resized.save_to(&out).unwrap();
    let reloaded = TerminalConfig::load_from(&out).unwrap();
    assert_eq!(reloaded.dimensions(), (132, 43));
    assert_eq!(reloaded.theme(), config.theme());
}

#[test]
fn config_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TerminalConfig>();
}
