//! Brand theme generation command.

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::models::DesignToken;
use crate::theme::{assemble_theme, ColorOverrides, Theme, ThemeMode};

/// Generate a brand theme as CSS custom properties
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Brand name for the generated theme
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Assembly mode: "override" or "full"
    #[arg(short, long, value_name = "MODE", default_value = "override")]
    pub mode: String,

    /// Brand color as role=hex (repeatable, e.g. --color primary=#2D6FDB)
    #[arg(short, long, value_name = "ROLE=HEX")]
    pub color: Vec<String>,

    /// Write the CSS to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output theme and CSS as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ThemeResponse {
    name: String,
    mode: ThemeMode,
    tokens: Vec<DesignToken>,
    css: String,
}

impl ThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let mode: ThemeMode = self
            .mode
            .parse()
            .map_err(|e: anyhow::Error| CliError::usage(e.to_string()))?;

        let colors = parse_color_args(&self.color)?;
        let catalog = load_catalog(self.catalog.as_deref())?;

        let theme = assemble_theme(&self.name, &colors, mode, &catalog)
            .map_err(|e| CliError::validation(format!("Theme assembly failed: {e}")))?;

        let css = render_with_header(&theme);

        if let Some(path) = &self.output {
            fs::write(path, &css)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            println!("Wrote {} tokens to {}", theme.tokens.len(), path.display());
            return Ok(());
        }

        if self.json {
            let response = ThemeResponse {
                name: theme.name.clone(),
                mode: theme.mode,
                tokens: theme.tokens.clone(),
                css,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!("{css}");
        }

        Ok(())
    }
}

/// Parses repeated role=hex arguments into an override set.
fn parse_color_args(args: &[String]) -> CliResult<ColorOverrides> {
    let mut colors = ColorOverrides::new();
    for arg in args {
        let Some((role, hex)) = arg.split_once('=') else {
            return Err(CliError::usage(format!(
                "Invalid --color '{arg}'. Expected role=hex, e.g. primary=#2D6FDB"
            )));
        };
        colors.set(role.trim(), hex.trim());
    }
    Ok(colors)
}

/// Prepends the generation stamp to the theme CSS.
fn render_with_header(theme: &Theme) -> String {
    format!(
        "/* Generated by tokenlens on {} ({} mode) */\n{}",
        Utc::now().format("%Y-%m-%d"),
        theme.mode,
        theme.to_css()
    )
}
