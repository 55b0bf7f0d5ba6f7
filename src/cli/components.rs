//! Component catalog command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::models::Component;

/// List components or show one with its tokens
#[derive(Debug, Clone, Args)]
pub struct ComponentsArgs {
    /// Show a single component by name
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ComponentsResponse {
    components: Vec<Component>,
    count: usize,
}

impl ComponentsArgs {
    /// Execute the components command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        if let Some(name) = self.name.as_deref() {
            let Some(component) = catalog.get_component(name) else {
                return Err(CliError::validation(format!(
                    "Component '{name}' not found in catalog"
                )));
            };

            if self.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(component)
                        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
                );
            } else {
                println!("{}: {}", component.name, component.description);
                if let Some(usage) = &component.usage {
                    println!("  Usage: {usage}");
                }
                println!("  Tokens:");
                for token_name in &component.tokens {
                    // Component token references are not validated at
                    // load time, so resolve them lazily here
                    match catalog.get(token_name) {
                        Some(token) => println!("    {:<28} {}", token.name, token.value),
                        None => println!("    {token_name:<28} (not in catalog)"),
                    }
                }
                for example in &component.examples {
                    println!("  Example: {example}");
                }
            }
            return Ok(());
        }

        let response = ComponentsResponse {
            components: catalog.components().to_vec(),
            count: catalog.component_count(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for component in &response.components {
                println!("{:<12} {}", component.name, component.description);
            }
            println!("\n{} component(s)", response.count);
        }

        Ok(())
    }
}
