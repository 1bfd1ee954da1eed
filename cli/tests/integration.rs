use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn fontpair(state_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fontpair"))
        .env_remove("FONTPAIR_CATALOG")
        .env_remove("RUST_LOG")
        .env("FONTPAIR_STATE_DIR", state_dir)
        .args(["--color", "never"])
        .args(args)
        .output()
        .expect("run fontpair")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn list_json_contains_whole_catalog() {
    let state = tempdir().expect("tempdir");
    let output = fontpair(state.path(), &["list", "--json"]);

    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("valid json");
    let combos = parsed.as_array().expect("array output");
    assert_eq!(combos.len(), 16);
    assert_eq!(combos[0]["id"], "playfair-inter");
}

#[test]
fn list_ndjson_emits_one_object_per_line() {
    let state = tempdir().expect("tempdir");
    let output = fontpair(state.path(), &["list", "--ndjson", "--vibe", "accessible"]);

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let combo: Value = serde_json::from_str(lines[0]).expect("valid json line");
    assert_eq!(combo["id"], "lexend-atkinson");
}

#[test]
fn export_link_names_google_family() {
    let state = tempdir().expect("tempdir");
    let output = fontpair(state.path(), &["export", "inter", "--format", "link"]);

    let stdout = stdout_of(&output);
    assert!(stdout.contains("family=Inter:wght@"));
    assert!(stdout.contains("&display=swap"));
}

#[test]
fn unknown_combo_exits_with_error() {
    let state = tempdir().expect("tempdir");
    let output = fontpair(state.path(), &["show", "not-a-combo"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: unknown combo"), "stderr: {stderr}");
}

#[test]
fn full_comparison_still_exits_zero() {
    let state = tempdir().expect("tempdir");
    for id in ["inter", "manrope", "playfair-inter"] {
        stdout_of(&fontpair(state.path(), &["compare", "add", id]));
    }

    let output = fontpair(state.path(), &["compare", "add", "lexend-atkinson"]);
    assert!(stdout_of(&output).contains("comparison is full"));
}

#[test]
fn state_survives_between_runs() {
    let state = tempdir().expect("tempdir");
    stdout_of(&fontpair(state.path(), &["fav", "add", "manrope"]));
    stdout_of(&fontpair(
        state.path(),
        &["preview", "set", "--subhead", "Kept across runs"],
    ));

    let favorites = stdout_of(&fontpair(state.path(), &["fav", "list"]));
    assert!(favorites.starts_with("manrope-only"));

    let stored = fs::read_to_string(state.path().join("fontpair-favorites.json"))
        .expect("favorites file");
    assert_eq!(stored, r#"["manrope-only"]"#);

    let preview = stdout_of(&fontpair(state.path(), &["preview", "show"]));
    assert!(preview.contains("subhead: Kept across runs"));
}

#[test]
fn corrupt_state_file_is_ignored() {
    let state = tempdir().expect("tempdir");
    fs::write(state.path().join("fontpair-favorites.json"), "{not json").expect("seed");

    let output = fontpair(state.path(), &["fav", "list"]);
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn validate_builtin_catalog() {
    let state = tempdir().expect("tempdir");
    let output = fontpair(state.path(), &["validate"]);
    assert_eq!(stdout_of(&output).trim(), "ok: 21 fonts, 16 combos");
}
