//! End-to-end tests for `tokenlens lookup`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the tokenlens binary
fn tokenlens_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokenlens")
}

#[test]
fn test_lookup_exact_value() {
    let (catalog_path, _temp_dir) = create_temp_catalog();

    let output = Command::new(tokenlens_bin())
        .args([
            "lookup",
            "--value",
            "#0066CC",
            "--catalog",
            catalog_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["found"], true);
    assert_eq!(result["token"], "color-primary");
    assert_eq!(result["category"], "color");
}

#[test]
fn test_lookup_is_normalized() {
    let (catalog_path, _temp_dir) = create_temp_catalog();

    // Case and whitespace differences still match
    let output = Command::new(tokenlens_bin())
        .args([
            "lookup",
            "--value",
            " #0066cc ",
            "--catalog",
            catalog_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["token"], "color-primary");
}

#[test]
fn test_lookup_miss_exits_nonzero() {
    let (catalog_path, _temp_dir) = create_temp_catalog();

    let output = Command::new(tokenlens_bin())
        .args([
            "lookup",
            "--value",
            "#123456",
            "--catalog",
            catalog_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "A miss is a validation failure");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["found"], false);
    assert!(result.get("token").is_none());
}
