//! Value extraction command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{read_scan_input, CliError, CliResult};
use crate::extract::{extract_values, ExtractedValue};

/// Extract literal style values from source text
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to a file to scan
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline text to scan
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ExtractResponse {
    values: Vec<ExtractedValue>,
    count: usize,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        let input = read_scan_input(self.file.as_deref(), self.text.as_deref())?;

        let values = extract_values(&input)
            .map_err(|e| CliError::io(format!("Extraction failed: {e}")))?;

        let response = ExtractResponse {
            count: values.len(),
            values,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.values.is_empty() {
            println!("No style values found");
        } else {
            println!("Found {} value(s):", response.count);
            for value in &response.values {
                match &value.property {
                    Some(property) => println!(
                        "  line {:>3}  {:<13} {}  ({property})",
                        value.line, value.kind, value.literal
                    ),
                    None => println!(
                        "  line {:>3}  {:<13} {}",
                        value.line, value.kind, value.literal
                    ),
                }
            }
        }

        Ok(())
    }
}
