//! WCAG contrast evaluation over catalog tokens.
//!
//! All outcomes are structured reports. A missing token or an
//! unparseable color value degrades that entry to a diagnostic instead
//! of failing the operation, so batch checks survive individual bad
//! entries.

use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::TokenCatalog;
use crate::models::{
    classify_contrast, contrast_ratio, ContrastRating, DesignToken, RgbColor, TokenCategory,
    WCAG_AA_NORMAL,
};

/// Result of checking one foreground/background token pair.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    /// Foreground token name as supplied
    pub foreground: String,
    /// Background token name as supplied
    pub background: String,
    /// Resolved foreground value, when the token exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_value: Option<String>,
    /// Resolved background value, when the token exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_value: Option<String>,
    /// Contrast rating, when both values parse as colors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<ContrastRating>,
    /// Token names that were not found in the catalog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    /// Why no rating could be computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    /// Alternative token advice when the pair fails AA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ContrastReport {
    /// True when a rating was computed and it passes AA.
    #[must_use]
    pub fn passes_aa(&self) -> bool {
        self.rating.is_some_and(|r| r.passes_aa)
    }
}

/// One foreground entry in a batch audit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// Foreground token name
    pub token: String,
    /// Foreground token value
    pub value: String,
    /// Contrast rating against the audited background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<ContrastRating>,
    /// Why no rating could be computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Batch audit of every color token against one background.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastAudit {
    /// Background token name as supplied
    pub background: String,
    /// Resolved background value, when the token exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_value: Option<String>,
    /// Why the audit produced no entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    /// Per-foreground results, sorted by descending contrast ratio
    pub entries: Vec<AuditEntry>,
}

/// Checks the contrast of two named tokens.
///
/// Missing tokens and unparseable color values are reported inside the
/// result. When the pair fails AA, the catalog is scanned in order for
/// the first color token that passes AA against the same background
/// and the find is attached as a suggestion.
#[must_use]
pub fn check_contrast(foreground: &str, background: &str, catalog: &TokenCatalog) -> ContrastReport {
    let fg_token = catalog.get(foreground);
    let bg_token = catalog.get(background);

    let mut report = ContrastReport {
        foreground: foreground.to_string(),
        background: background.to_string(),
        foreground_value: fg_token.map(|t| t.value.clone()),
        background_value: bg_token.map(|t| t.value.clone()),
        rating: None,
        missing: Vec::new(),
        diagnostic: None,
        suggestion: None,
    };

    if fg_token.is_none() {
        report.missing.push(foreground.to_string());
    }
    if bg_token.is_none() {
        report.missing.push(background.to_string());
    }
    if !report.missing.is_empty() {
        report.diagnostic = Some(format!(
            "Token{} {} not found in catalog",
            if report.missing.len() > 1 { "s" } else { "" },
            report
                .missing
                .iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        return report;
    }

    let (Some(fg_token), Some(bg_token)) = (fg_token, bg_token) else {
        return report;
    };

    let fg_color = match parse_token_color(fg_token) {
        Ok(color) => color,
        Err(diagnostic) => {
            report.diagnostic = Some(diagnostic);
            return report;
        }
    };
    let bg_color = match parse_token_color(bg_token) {
        Ok(color) => color,
        Err(diagnostic) => {
            report.diagnostic = Some(diagnostic);
            return report;
        }
    };

    let ratio = contrast_ratio(&fg_color, &bg_color);
    let rating = classify_contrast(ratio);
    report.rating = Some(rating);

    if !rating.passes_aa {
        report.suggestion = Some(find_alternative(&bg_color, bg_token, catalog));
    }

    report
}

/// Evaluates every color token (except the background itself) as a
/// foreground against one background token.
#[must_use]
pub fn audit_against(background: &str, catalog: &TokenCatalog) -> ContrastAudit {
    let mut audit = ContrastAudit {
        background: background.to_string(),
        background_value: None,
        diagnostic: None,
        entries: Vec::new(),
    };

    let Some(bg_token) = catalog.get(background) else {
        audit.diagnostic = Some(format!("Token '{background}' not found in catalog"));
        return audit;
    };
    audit.background_value = Some(bg_token.value.clone());

    let bg_color = match parse_token_color(bg_token) {
        Ok(color) => color,
        Err(diagnostic) => {
            audit.diagnostic = Some(diagnostic);
            return audit;
        }
    };

    for token in catalog.tokens_in_category(TokenCategory::Color) {
        if token.name == bg_token.name {
            continue;
        }
        let entry = match parse_token_color(token) {
            Ok(color) => AuditEntry {
                token: token.name.clone(),
                value: token.value.clone(),
                rating: Some(classify_contrast(contrast_ratio(&color, &bg_color))),
                diagnostic: None,
            },
            Err(diagnostic) => AuditEntry {
                token: token.name.clone(),
                value: token.value.clone(),
                rating: None,
                diagnostic: Some(diagnostic),
            },
        };
        audit.entries.push(entry);
    }

    // Descending by ratio; entries without a ratio compare as equal and
    // settle after the rated ones, keeping catalog order among themselves
    audit.entries.sort_by(|a, b| {
        let ra = a.rating.map_or(f64::NEG_INFINITY, |r| r.ratio);
        let rb = b.rating.map_or(f64::NEG_INFINITY, |r| r.ratio);
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
    });

    audit
}

/// Parses a token's stored value as a color, mapping failure to a
/// diagnostic string naming the token.
fn parse_token_color(token: &DesignToken) -> Result<RgbColor, String> {
    RgbColor::parse_css(&token.value).map_err(|_| {
        format!(
            "Value '{}' of token '{}' is not a recognized color format",
            token.value, token.name
        )
    })
}

/// First-fit scan for a replacement foreground that passes AA against
/// the given background. Catalog order, not best contrast, decides.
fn find_alternative(
    bg_color: &RgbColor,
    bg_token: &DesignToken,
    catalog: &TokenCatalog,
) -> String {
    for token in catalog.tokens_in_category(TokenCategory::Color) {
        if token.name == bg_token.name {
            continue;
        }
        let Ok(color) = RgbColor::parse_css(&token.value) else {
            continue;
        };
        let ratio = contrast_ratio(&color, bg_color);
        if ratio >= WCAG_AA_NORMAL {
            return format!(
                "Try '{}' ({}), which reaches {:.2}:1 against '{}'",
                token.name, token.value, ratio, bg_token.name
            );
        }
    }
    format!(
        "No color token in the catalog reaches AA contrast against '{}'",
        bg_token.name
    )
}
