// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "mdt-version", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_manifest(dir: &TempDir, version: &str) -> String {
    let path = dir.path().join("plugin.json");
    fs::write(
        &path,
        format!(r#"{{"name": "mdt", "version": "{}"}}"#, version),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

fn manifest_version(path: &str) -> String {
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    doc["version"].as_str().unwrap().to_string()
}

#[test]
fn test_help() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("mdt-version"));
    assert!(stdout.contains("pre-release lifecycle"));
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("mdt-version"));
}

#[test]
fn test_unknown_action_fails_with_valid_list() {
    let output = run_cli(&["major"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown action"));
    assert!(stderr.contains("release"));
}

#[test]
fn test_missing_action_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_minor_bump_updates_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "0.11.0");

    let output = run_cli(&["minor", "--manifest", &manifest]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(manifest_version(&manifest), "0.12.0");
}

#[test]
fn test_full_lifecycle_through_the_cli() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "0.10.0");

    for (action, expected) in [
        ("dev", "0.11.0-dev"),
        ("dev", "0.11.0-dev.1"),
        ("alpha", "0.11.0-alpha"),
        ("beta", "0.11.0-beta"),
        ("rc", "0.11.0-rc"),
        ("release", "0.11.0"),
    ] {
        let output = run_cli(&[action, "--manifest", &manifest]);
        assert!(
            output.status.success(),
            "{} failed: {}",
            action,
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(manifest_version(&manifest), expected);
    }
}

#[test]
fn test_dry_run_leaves_manifest_untouched() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "0.11.0-rc.5");
    let before = fs::read(&manifest).unwrap();

    let output = run_cli(&["release", "--dry-run", "--manifest", &manifest]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0.11.0"));
    assert_eq!(fs::read(&manifest).unwrap(), before);
}

#[test]
fn test_illegal_transition_fails_and_preserves_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "0.11.0-beta");
    let before = fs::read(&manifest).unwrap();

    let output = run_cli(&["minor", "--manifest", &manifest]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Illegal transition"));
    assert_eq!(fs::read(&manifest).unwrap(), before);
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    let output = run_cli(&["patch", "--manifest", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Manifest not found"));
    assert!(!Path::new(&missing).exists());
}
