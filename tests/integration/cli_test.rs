//! CLI behavior tests
//!
//! Runs the real binary against the fixtures and built-in presets.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// termcfg with colors off and HOME pointing at an empty directory
fn termcfg(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termcfg"));
    cmd.env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG")
        .env("HOME", home.path());
    cmd
}

#[test]
fn check_valid_file_prints_ok() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .arg("check")
        .arg(fixture("valid.toml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK"));
}

#[test]
fn check_valid_json_file_prints_ok() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .arg("check")
        .arg(fixture("valid.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("valid.json"));
}

#[test]
fn check_missing_role_fails_with_role_name() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .arg("check")
        .arg(fixture("missing_background.toml"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("theme.background"));
}

#[test]
fn check_reports_each_invalid_fixture() {
    let home = TempDir::new().unwrap();
    let cases = [
        ("bad_color.toml", "theme.brightCyan"),
        ("zero_cols.toml", "`cols` is out of range: 0"),
        ("unknown_role.toml", "unknown theme role `orange`"),
        ("negative_rows.json", "`rows` is out of range: -1"),
    ];
    for (name, expected) in cases {
        termcfg(&home)
            .arg("check")
            .arg(fixture(name))
            .assert()
            .code(1)
            .stderr(predicate::str::contains(expected));
    }
}

#[test]
fn check_without_config_reports_default_path() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"))
        .stderr(predicate::str::contains("terminal.toml"));
}

#[test]
fn check_reads_default_config_path() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("termcfg");
    fs::create_dir_all(&dir).unwrap();
    fs::copy(fixture("valid.toml"), dir.join("terminal.toml")).unwrap();

    termcfg(&home).arg("check").assert().success();
}

#[test]
fn unknown_preset_lists_available() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .args(["check", "--preset", "solarized"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("amber, vga"));
}

#[test]
fn export_json_is_xterm_options() {
    let home = TempDir::new().unwrap();
    let output = termcfg(&home)
        .args(["export", "--preset", "amber"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["fontFamily"], "\"Press Start 2P\", monospace");
    assert_eq!(value["cols"], 80);
    assert_eq!(value["rows"], 40);
    assert_eq!(value["convertEol"], true);
    assert_eq!(value["theme"]["background"], "#000000");
}

#[test]
fn export_toml_round_trips_through_check() {
    let home = TempDir::new().unwrap();
    let output = termcfg(&home)
        .args(["export", "--format", "toml"])
        .arg(fixture("valid.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = home.path().join("exported.toml");
    fs::write(&path, &output.stdout).unwrap();
    termcfg(&home).arg("check").arg(&path).assert().success();
}

#[test]
fn show_prints_annotated_toml() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .arg("show")
        .arg(fixture("valid.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("fontFamily = \"monospace\""))
        .stdout(predicate::str::contains("[theme]"))
        .stdout(predicate::str::contains("# "));
}

#[test]
fn show_output_keeps_multiline_font_family() {
    let home = TempDir::new().unwrap();
    let source = fs::read_to_string(fixture("valid.toml")).unwrap().replace(
        "fontFamily = \"monospace\"",
        "fontFamily = \"mono\\ncols = 80\\n[theme]\"",
    );
    let input = home.path().join("multiline.toml");
    fs::write(&input, source).unwrap();

    let shown = termcfg(&home).arg("show").arg(&input).output().unwrap();
    assert!(shown.status.success());
    let annotated = home.path().join("annotated.toml");
    fs::write(&annotated, &shown.stdout).unwrap();

    let output = termcfg(&home).arg("export").arg(&annotated).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["fontFamily"], "mono\ncols = 80\n[theme]");
}

#[test]
fn presets_list_names_every_preset() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amber"))
        .stdout(predicate::str::contains("vga"));
}

#[test]
fn presets_show_output_is_a_valid_config() {
    let home = TempDir::new().unwrap();
    let output = termcfg(&home)
        .args(["presets", "show", "vga"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = home.path().join("vga.toml");
    fs::write(&path, &output.stdout).unwrap();
    termcfg(&home).arg("check").arg(&path).assert().success();
}

#[test]
fn preview_without_color_lists_roles() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .args(["preview", "--no-color", "--preset", "vga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brightWhite"))
        .stdout(predicate::str::contains("grid 80x25"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn file_and_preset_are_exclusive() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .args(["check", "--preset", "amber"])
        .arg(fixture("valid.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    termcfg(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termcfg"));
}
