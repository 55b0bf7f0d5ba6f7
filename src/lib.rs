//! tokenlens library
//!
//! Core functionality for querying a design token catalog: literal
//! value extraction, token matching and migration suggestions, WCAG
//! contrast evaluation, and brand theme generation.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod extract;
pub mod matching;
pub mod models;
pub mod theme;
