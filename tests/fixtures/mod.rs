//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small deterministic catalog used by tests that need exact control
/// over catalog contents and order.
///
/// Notably it has no token valued `14px`, and `color-primary` is the
/// first color token, so first-fit behaviors are predictable.
pub fn sample_catalog_json() -> &'static str {
    r##"{
  "tokens": [
    { "name": "color-primary", "value": "#0066CC", "category": "color", "description": "Primary brand color" },
    { "name": "color-background", "value": "#FFFFFF", "category": "color", "description": "Page background" },
    { "name": "color-text", "value": "#212121", "category": "color", "description": "Body text" },
    { "name": "color-subtle", "value": "#CCCCCC", "category": "color", "description": "Subtle borders" },
    { "name": "color-primary-hue", "value": "210", "category": "color", "description": "Primary scale hue" },
    { "name": "spacing-sm", "value": "8px", "category": "spacing", "description": "Small spacing" },
    { "name": "spacing-md", "value": "16px", "category": "spacing", "description": "Default spacing" },
    { "name": "font-size-lg", "value": "18px", "category": "typography", "description": "Large text" }
  ],
  "components": [
    {
      "name": "button",
      "description": "Primary action trigger",
      "tokens": ["color-primary", "spacing-md", "token-that-is-not-defined"],
      "usage": "One per view"
    }
  ]
}"##
}

/// Writes the sample catalog to a temp file.
///
/// # Returns
/// The catalog path and the guard keeping the directory alive.
pub fn create_temp_catalog() -> (PathBuf, TempDir) {
    create_temp_file("catalog.json", sample_catalog_json())
}

/// Writes arbitrary contents to a named file in a fresh temp directory.
pub fn create_temp_file(name: &str, contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, temp_dir)
}

/// The CSS snippet used by extraction scenarios.
pub fn sample_css() -> &'static str {
    ".button { background: #0066CC; padding: 16px; font-size: 14px; }"
}
