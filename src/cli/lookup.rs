//! Exact token lookup command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::matching::find_exact;
use crate::models::TokenCategory;

/// Find the token whose value equals a literal
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Literal value to look up (e.g., "#0066CC", "16px")
    #[arg(short, long, value_name = "VALUE")]
    pub value: String,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LookupResponse {
    query: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<TokenCategory>,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        let token = find_exact(&self.value, &catalog);
        let response = LookupResponse {
            query: self.value.clone(),
            found: token.is_some(),
            token: token.map(|t| t.name.clone()),
            value: token.map(|t| t.value.clone()),
            category: token.map(|t| t.category),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(token) = token {
            println!("{}  =  {}  [{}]", token.name, token.value, token.category);
            if let Some(description) = &token.description {
                println!("  {description}");
            }
        } else {
            println!("No token with value '{}'", self.value);
        }

        if !response.found {
            return Err(CliError::validation(format!(
                "No exact token for '{}'",
                self.value
            )));
        }

        Ok(())
    }
}
