//! Data models for design tokens, components, and color values.
//!
//! This module contains the core data structures used throughout the
//! engine. Models are independent of the CLI and of catalog loading.

pub mod color;
pub mod token;

// Re-export all model types
pub use color::{
    classify_contrast, contrast_ratio, contrast_ratio_css, ContrastLevel, ContrastRating,
    HslColor, RgbColor, WCAG_AA_NORMAL, WCAG_AAA_NORMAL,
};
pub use token::{Component, DesignToken, TokenCategory};
