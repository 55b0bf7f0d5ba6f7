//! Token catalog listing and search command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::models::{DesignToken, TokenCategory};

/// List or search the token catalog
#[derive(Debug, Clone, Args)]
pub struct TokensArgs {
    /// Restrict the listing to one category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Search tokens by name, value, or description
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TokensResponse {
    tokens: Vec<DesignToken>,
    count: usize,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> CliResult<()> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<TokenCategory>)
            .transpose()
            .map_err(|e| CliError::usage(e.to_string()))?;

        let catalog = load_catalog(self.catalog.as_deref())?;

        let tokens: Vec<DesignToken> = match self.search.as_deref() {
            Some(query) => catalog.search(query).into_iter().cloned().collect(),
            None => catalog.tokens().to_vec(),
        };
        let tokens: Vec<DesignToken> = tokens
            .into_iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .collect();

        let response = TokensResponse {
            count: tokens.len(),
            tokens,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.tokens.is_empty() {
            println!("No tokens found");
        } else {
            for token in &response.tokens {
                let description = token.description.as_deref().unwrap_or("");
                println!(
                    "{:<28} {:<12} {:<32} {description}",
                    token.name, token.category, token.value
                );
            }
            println!("\n{} token(s)", response.count);
        }

        Ok(())
    }
}
