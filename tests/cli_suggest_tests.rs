//! End-to-end tests for `tokenlens suggest`.

use std::process::Command;

/// Path to the tokenlens binary
fn tokenlens_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokenlens")
}

fn suggest_json(args: &[&str]) -> serde_json::Value {
    let output = Command::new(tokenlens_bin())
        .arg("suggest")
        .args(args)
        .arg("--json")
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Should parse JSON")
}

#[test]
fn test_suggest_value_shared_by_two_categories() {
    // The embedded catalog values both spacing-md and font-size-md at
    // 16px; both come back as exact matches
    let result = suggest_json(&["--value", "16px"]);
    let suggestions = result["suggestions"].as_array().unwrap();

    let exact: Vec<&serde_json::Value> = suggestions
        .iter()
        .filter(|s| s["similarity"] == 1.0)
        .collect();
    assert!(exact.iter().any(|s| s["token"] == "spacing-md"));
    assert!(exact.iter().any(|s| s["token"] == "font-size-md"));
    for suggestion in exact {
        assert_eq!(suggestion["reason"], "Exact match");
    }
}

#[test]
fn test_suggest_caps_and_threshold() {
    let result = suggest_json(&["--value", "15px"]);
    let suggestions = result["suggestions"].as_array().unwrap();

    assert!(suggestions.len() <= 5, "Never more than five suggestions");
    assert!(!suggestions.is_empty());

    let mut previous = f64::INFINITY;
    for suggestion in suggestions {
        let similarity = suggestion["similarity"].as_f64().unwrap();
        assert!(similarity >= 0.5, "All results clear the threshold");
        assert!(similarity <= previous, "Sorted descending");
        previous = similarity;
    }
}

#[test]
fn test_suggest_category_filter() {
    let result = suggest_json(&["--value", "15px", "--category", "spacing"]);
    let suggestions = result["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    for suggestion in suggestions {
        assert!(suggestion["token"].as_str().unwrap().starts_with("spacing-"));
    }
}

#[test]
fn test_suggest_color_near_miss_is_empty() {
    // Color similarity is binary, so a near-miss returns nothing
    let result = suggest_json(&["--value", "#0066CD"]);
    assert!(result["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_suggest_unknown_category_is_usage_error() {
    let output = Command::new(tokenlens_bin())
        .args(["suggest", "--value", "16px", "--category", "colour"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}
