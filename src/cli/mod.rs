//! CLI command handlers for tokenlens.
//!
//! This module provides headless, scriptable access to the token
//! engine for automation, testing, and CI integration. Every command
//! supports `--json` for machine-readable output.

pub mod check;
pub mod common;
pub mod components;
pub mod config;
pub mod contrast;
pub mod extract;
pub mod lookup;
pub mod suggest;
pub mod theme;
pub mod tokens;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult};
pub use components::ComponentsArgs;
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use extract::ExtractArgs;
pub use lookup::LookupArgs;
pub use suggest::SuggestArgs;
pub use theme::ThemeArgs;
pub use tokens::TokensArgs;
