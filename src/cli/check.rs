//! Hard-coded value check command.
//!
//! Scans text for literal style values and reports, for each one,
//! whether the catalog already has a token with that exact value. For
//! values with no exact token, the first catalog token of the matching
//! category is offered as the replacement.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, read_scan_input, CliError, CliResult};
use crate::extract::{extract_values, ExtractedKind};
use crate::matching::{find_exact, replacement_for_category};

/// Check source text for hard-coded style values
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to a file to scan
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline text to scan
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when hard-coded values are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct CheckEntry {
    kind: ExtractedKind,
    literal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<String>,
    line: usize,
    /// Token whose value equals the literal, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    /// Replacement advice for hard-coded values
    #[serde(skip_serializing_if = "Option::is_none")]
    replacement: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    entries: Vec<CheckEntry>,
    total: usize,
    matched: usize,
    hard_coded: usize,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let input = read_scan_input(self.file.as_deref(), self.text.as_deref())?;
        let catalog = load_catalog(self.catalog.as_deref())?;

        let values = extract_values(&input)
            .map_err(|e| CliError::io(format!("Extraction failed: {e}")))?;

        let entries: Vec<CheckEntry> = values
            .into_iter()
            .map(|value| {
                let token = find_exact(&value.literal, &catalog).map(|t| t.name.clone());
                let replacement = if token.is_none() {
                    replacement_for_category(value.kind.category(), &catalog)
                        .map(|t| format!("{} ({})", t.name, t.value))
                } else {
                    None
                };
                CheckEntry {
                    kind: value.kind,
                    literal: value.literal,
                    property: value.property,
                    line: value.line,
                    token,
                    replacement,
                }
            })
            .collect();

        let matched = entries.iter().filter(|e| e.token.is_some()).count();
        let response = CheckResponse {
            total: entries.len(),
            matched,
            hard_coded: entries.len() - matched,
            entries,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.entries.is_empty() {
            println!("No style values found");
        } else {
            for entry in &response.entries {
                match (&entry.token, &entry.replacement) {
                    (Some(token), _) => {
                        println!("  ✓ line {:>3}  {}  is {token}", entry.line, entry.literal);
                    }
                    (None, Some(replacement)) => {
                        println!(
                            "  ✗ line {:>3}  {}  hard-coded, consider {replacement}",
                            entry.line, entry.literal
                        );
                    }
                    (None, None) => {
                        println!(
                            "  ✗ line {:>3}  {}  hard-coded, no {} token available",
                            entry.line,
                            entry.literal,
                            entry.kind.category()
                        );
                    }
                }
            }
            println!(
                "\n{} value(s): {} tokenized, {} hard-coded",
                response.total, response.matched, response.hard_coded
            );
        }

        if self.strict && response.hard_coded > 0 {
            return Err(CliError::validation(format!(
                "{} hard-coded value(s) found",
                response.hard_coded
            )));
        }

        Ok(())
    }
}
