//! Configuration management command.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;

/// Show or change tokenlens configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show(ShowConfigArgs),
    /// Set the default catalog file
    SetCatalog(SetCatalogArgs),
    /// Clear the default catalog (use the embedded catalog)
    ClearCatalog,
}

/// Show the current configuration
#[derive(Debug, Clone, Args)]
pub struct ShowConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set the default catalog file
#[derive(Debug, Clone, Args)]
pub struct SetCatalogArgs {
    /// Path to a catalog JSON file
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
struct ConfigResponse {
    config_path: String,
    catalog_path: Option<String>,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::SetCatalog(args) => args.execute(),
            ConfigCommand::ClearCatalog => clear_catalog(),
        }
    }
}

impl ShowConfigArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        let config_path = Config::config_path().map_err(|e| CliError::io(e.to_string()))?;

        let response = ConfigResponse {
            config_path: config_path.display().to_string(),
            catalog_path: config
                .catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string()),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Config file: {}", response.config_path);
            match &response.catalog_path {
                Some(path) => println!("Catalog:     {path}"),
                None => println!("Catalog:     (embedded default)"),
            }
        }

        Ok(())
    }
}

impl SetCatalogArgs {
    /// Execute the set-catalog command
    pub fn execute(&self) -> CliResult<()> {
        if !self.path.exists() {
            return Err(CliError::validation(format!(
                "Catalog file not found: {}",
                self.path.display()
            )));
        }

        let mut config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        config.catalog.path = Some(self.path.clone());
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("Default catalog set to {}", self.path.display());
        Ok(())
    }
}

/// Remove the configured catalog path.
fn clear_catalog() -> CliResult<()> {
    let mut config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
    config.catalog.path = None;
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

    println!("Default catalog cleared; using the embedded catalog");
    Ok(())
}
