//! Binary tests for the generate and check commands.

use serde_json::Value as JsonValue;
use std::process::Command;
use tempfile::TempDir;

fn specforge() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_specforge"));
    command.env_remove("SPECFORGE_SEED").env_remove("RUST_LOG");
    command
}

#[test]
fn test_generate_json_to_stdout() {
    let output = specforge()
        .args(["generate", "--spec", crate::USERS_SPEC, "--iterations", "3"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let records: JsonValue = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["id"], 3);
}

#[test]
fn test_generate_jsonl_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keys.jsonl");

    let output = specforge()
        .args(["generate", "--spec", crate::USERS_SPEC])
        .args(["--start", "10", "--iterations", "4", "--group", "keys"])
        .args(["--format", "jsonl", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<JsonValue> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["id"], 11);
    assert_eq!(lines[0].as_object().unwrap().len(), 2);
}

#[test]
fn test_seed_from_environment() {
    let run = |seed: &str| {
        let output = specforge()
            .env("SPECFORGE_SEED", seed)
            .args(["generate", "--spec", crate::USERS_SPEC, "--iterations", "1"])
            .args(["--group", "keys", "--format", "jsonl"])
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    assert_eq!(run("5"), run("5"));
    assert_ne!(run("5"), run("6"));
}

#[test]
fn test_check() {
    let output = specforge()
        .args(["check", "--spec", crate::USERS_SPEC])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("7 fields"), "{stdout}");
}

#[test]
fn test_check_reports_malformed_spec() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"x": {"type": "nested"}}"#).unwrap();

    let output = specforge()
        .args(["check", "--spec"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("nested"), "{stderr}");
}

#[test]
fn test_missing_spec_file() {
    let output = specforge()
        .args(["generate", "--spec", "does/not/exist.yaml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load specification"));
}
