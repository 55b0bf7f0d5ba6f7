//! tokenlens - design token lookup, migration, and theme generation.
//!
//! This binary is a thin shell over the engine in the library crate:
//! it parses arguments, loads the catalog, invokes the requested
//! operation, and renders the structured result.

use clap::{Parser, Subcommand};

use tokenlens::cli::{
    CheckArgs, ComponentsArgs, ConfigArgs, ContrastArgs, ExtractArgs, LookupArgs, SuggestArgs,
    ThemeArgs, TokensArgs,
};

/// Design token lookup, migration, and theme generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Extract literal style values from source text
    Extract(ExtractArgs),
    /// Check source text for hard-coded style values
    Check(CheckArgs),
    /// Find the token whose value equals a literal
    Lookup(LookupArgs),
    /// Suggest catalog tokens to replace a literal value
    Suggest(SuggestArgs),
    /// Check WCAG contrast between catalog color tokens
    Contrast(ContrastArgs),
    /// Generate a brand theme as CSS custom properties
    Theme(ThemeArgs),
    /// List or search the token catalog
    Tokens(TokensArgs),
    /// List components or show one with its tokens
    Components(ComponentsArgs),
    /// Show or change tokenlens configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Extract(args) => args.execute(),
        Command::Check(args) => args.execute(),
        Command::Lookup(args) => args.execute(),
        Command::Suggest(args) => args.execute(),
        Command::Contrast(args) => args.execute(),
        Command::Theme(args) => args.execute(),
        Command::Tokens(args) => args.execute(),
        Command::Components(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
