//! WCAG contrast check command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::contrast::{audit_against, check_contrast};

/// Check WCAG contrast between catalog color tokens
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground token name (required unless --audit)
    #[arg(short, long, value_name = "TOKEN")]
    pub foreground: Option<String>,

    /// Background token name
    #[arg(short, long, value_name = "TOKEN")]
    pub background: String,

    /// Evaluate every color token against the background
    #[arg(long)]
    pub audit: bool,

    /// Path to a catalog JSON file (defaults to the configured or
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        if self.audit {
            return self.execute_audit(&catalog);
        }

        let Some(foreground) = self.foreground.as_deref() else {
            return Err(CliError::usage(
                "Supply --foreground, or use --audit to scan every color token",
            ));
        };

        let report = check_contrast(foreground, &self.background, &catalog);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{} on {}", report.foreground, report.background);
            if let Some(rating) = report.rating {
                println!("  Ratio: {:.2}:1", rating.ratio);
                println!("  AA:    {}", if rating.passes_aa { "✓ pass" } else { "✗ fail" });
                println!("  AAA:   {}", if rating.passes_aaa { "✓ pass" } else { "✗ fail" });
            }
            if let Some(diagnostic) = &report.diagnostic {
                println!("  {diagnostic}");
            }
            if let Some(suggestion) = &report.suggestion {
                println!("  {suggestion}");
            }
        }

        if report.diagnostic.is_some() {
            return Err(CliError::validation("Contrast could not be computed"));
        }
        if !report.passes_aa() {
            return Err(CliError::validation("Contrast is below the AA threshold"));
        }

        Ok(())
    }

    /// Run batch mode: every color token against the background.
    fn execute_audit(&self, catalog: &crate::catalog::TokenCatalog) -> CliResult<()> {
        let audit = audit_against(&self.background, catalog);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&audit)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Contrast audit against '{}':", audit.background);
            for entry in &audit.entries {
                match entry.rating {
                    Some(rating) => println!(
                        "  {:<28} {:>6.2}:1  {}",
                        entry.token, rating.ratio, rating.level
                    ),
                    None => println!("  {:<28}       -  unparseable", entry.token),
                }
            }
            if let Some(diagnostic) = &audit.diagnostic {
                println!("  {diagnostic}");
            }
        }

        if audit.diagnostic.is_some() {
            return Err(CliError::validation("Audit could not be completed"));
        }

        Ok(())
    }
}
