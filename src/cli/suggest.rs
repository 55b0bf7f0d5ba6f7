//! Migration suggestion command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::matching::{suggest_migration, MatchResult};
use crate::models::TokenCategory;

/// Suggest catalog tokens to replace a literal value
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Literal value to migrate (e.g., "15px", "#0066CC")
    #[arg(short, long, value_name = "VALUE")]
    pub value: String,

    /// Restrict suggestions to one category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    query: String,
    suggestions: Vec<MatchResult>,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self) -> CliResult<()> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<TokenCategory>)
            .transpose()
            .map_err(|e| CliError::usage(e.to_string()))?;

        let catalog = load_catalog(self.catalog.as_deref())?;

        let suggestions = suggest_migration(&self.value, &catalog, category);
        let response = SuggestResponse {
            query: self.value.clone(),
            suggestions,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.suggestions.is_empty() {
            println!("No similar tokens for '{}'", self.value);
        } else {
            println!("Suggestions for '{}':", self.value);
            for suggestion in &response.suggestions {
                println!(
                    "  {:<24} {:<12} {:.2}  {}",
                    suggestion.token, suggestion.value, suggestion.similarity, suggestion.reason
                );
            }
        }

        Ok(())
    }
}
