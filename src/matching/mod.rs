//! Token matching: mapping literal style values onto catalog tokens.
//!
//! Two distinct paths live here. `suggest_migration` ranks candidate
//! tokens by a similarity score and is used for migration advice.
//! `replacement_for_category` is the cheaper validation path: it
//! returns the first category-appropriate token in catalog order, with
//! no ranking at all.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::catalog::TokenCatalog;
use crate::models::{DesignToken, TokenCategory};

/// Maximum number of migration suggestions returned per query.
const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity a migration suggestion must reach to be kept.
const MIN_SIMILARITY: f64 = 0.5;

/// Detected shape of a literal value.
///
/// The classifier is shared by extraction consumers and matching so
/// the two always agree on what bucket a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueShape {
    /// Hex literal or rgb()/rgba() call
    Color,
    /// Numeric value with a px suffix
    Pixel,
    /// Numeric value with a rem suffix
    Rem,
    /// Numeric value with an em suffix
    Em,
    /// Font weight: a 100-900 hundreds triad
    FontWeight,
    /// Bare number
    Number,
    /// Anything else
    Text,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Color => "color",
            Self::Pixel => "pixel",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::FontWeight => "font-weight",
            Self::Number => "number",
            Self::Text => "text",
        };
        f.pad(label)
    }
}

/// Why a match result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRationale {
    /// Normalized values are identical
    Exact,
    /// Values are numerically or categorically close
    CloseNumeric,
}

/// A single candidate token for a queried literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// The literal that was queried
    pub query: String,
    /// Name of the matched token
    pub token: String,
    /// The matched token's stored value
    pub value: String,
    /// Similarity in [0, 1]
    pub similarity: f64,
    /// How the match came about
    pub rationale: MatchRationale,
    /// Human-readable strength label derived from the similarity
    pub reason: &'static str,
}

/// Classifies a literal value into its shape bucket.
#[must_use]
pub fn classify_value(literal: &str) -> ValueShape {
    let trimmed = literal.trim();
    let lower = trimmed.to_lowercase();

    if lower.starts_with('#') || lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return ValueShape::Color;
    }
    // "rem" must be checked before "em"
    if let Some(magnitude) = lower.strip_suffix("rem") {
        if magnitude.trim().parse::<f64>().is_ok() {
            return ValueShape::Rem;
        }
    }
    if let Some(magnitude) = lower.strip_suffix("em") {
        if magnitude.trim().parse::<f64>().is_ok() {
            return ValueShape::Em;
        }
    }
    if let Some(magnitude) = lower.strip_suffix("px") {
        if magnitude.trim().parse::<f64>().is_ok() {
            return ValueShape::Pixel;
        }
    }
    if let Ok(weight) = lower.parse::<u32>() {
        if (100..=900).contains(&weight) && weight % 100 == 0 {
            return ValueShape::FontWeight;
        }
    }
    if lower.parse::<f64>().is_ok() {
        return ValueShape::Number;
    }

    ValueShape::Text
}

/// Normalizes a value for exact comparison: lowercased with all
/// whitespace removed.
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Finds the first catalog token whose normalized value equals the
/// normalized query literal.
#[must_use]
pub fn find_exact<'a>(literal: &str, catalog: &'a TokenCatalog) -> Option<&'a DesignToken> {
    let wanted = normalize(literal);
    catalog
        .tokens()
        .iter()
        .find(|token| normalize(&token.value) == wanted)
}

/// Ranks catalog tokens as migration targets for a literal value.
///
/// Candidates are restricted to tokens whose value shape matches the
/// query's shape (and to `category` when one is given). Results below
/// similarity 0.5 are dropped, the rest are sorted descending (stable,
/// so catalog order breaks ties) and capped at 5.
#[must_use]
pub fn suggest_migration(
    literal: &str,
    catalog: &TokenCatalog,
    category: Option<TokenCategory>,
) -> Vec<MatchResult> {
    let shape = classify_value(literal);

    let mut results: Vec<MatchResult> = catalog
        .tokens()
        .iter()
        .filter(|token| category.is_none_or(|c| token.category == c))
        .filter(|token| classify_value(&token.value) == shape)
        .filter_map(|token| {
            let similarity = similarity(shape, literal, &token.value);
            if similarity < MIN_SIMILARITY {
                return None;
            }
            Some(MatchResult {
                query: literal.to_string(),
                token: token.name.clone(),
                value: token.value.clone(),
                similarity,
                rationale: if (similarity - 1.0).abs() < f64::EPSILON {
                    MatchRationale::Exact
                } else {
                    MatchRationale::CloseNumeric
                },
                reason: reason_for(similarity),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(MAX_SUGGESTIONS);
    results
}

/// Returns the first token of the requested category, in catalog order.
///
/// This is the validation replacement path, separate from
/// `suggest_migration`: the first entry in catalog order wins
/// regardless of how close its value is.
#[must_use]
pub fn replacement_for_category(
    category: TokenCategory,
    catalog: &TokenCatalog,
) -> Option<&DesignToken> {
    catalog.tokens().iter().find(|t| t.category == category)
}

/// Similarity between a query literal and a candidate value that share
/// a shape bucket.
fn similarity(shape: ValueShape, query: &str, candidate: &str) -> f64 {
    match shape {
        // Binary for colors: equal or zero, no partial credit
        ValueShape::Color => {
            if normalize(query) == normalize(candidate) {
                1.0
            } else {
                0.0
            }
        }
        ValueShape::Pixel | ValueShape::Rem | ValueShape::Em => {
            numeric_similarity(magnitude_of(query), magnitude_of(candidate))
        }
        ValueShape::FontWeight => {
            if normalize(query) == normalize(candidate) {
                1.0
            } else {
                0.5
            }
        }
        ValueShape::Number | ValueShape::Text => {
            if normalize(query) == normalize(candidate) {
                1.0
            } else {
                0.3
            }
        }
    }
}

/// Proportional closeness of two magnitudes: `1 - |a-b| / max(a, b)`,
/// floored at 0.
fn numeric_similarity(a: f64, b: f64) -> f64 {
    if (a - b).abs() < f64::EPSILON {
        return 1.0;
    }
    let larger = a.max(b);
    if larger <= 0.0 {
        return 0.0;
    }
    (1.0 - (a - b).abs() / larger).max(0.0)
}

/// Numeric magnitude of a unit-suffixed literal ("16px" -> 16.0).
fn magnitude_of(literal: &str) -> f64 {
    let lower = literal.trim().to_lowercase();
    let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    digits.trim().parse().unwrap_or(0.0)
}

/// Strength label for a similarity score.
fn reason_for(similarity: f64) -> &'static str {
    if (similarity - 1.0).abs() < f64::EPSILON {
        "Exact match"
    } else if similarity > 0.9 {
        "Very close match"
    } else if similarity > 0.7 {
        "Close match"
    } else {
        "Similar value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DesignToken;

    fn test_catalog() -> TokenCatalog {
        let tokens = vec![
            DesignToken::new("color-primary", "#0066CC", TokenCategory::Color),
            DesignToken::new("color-background", "#FFFFFF", TokenCategory::Color),
            DesignToken::new("spacing-sm", "8px", TokenCategory::Spacing),
            DesignToken::new("spacing-md", "16px", TokenCategory::Spacing),
            DesignToken::new("spacing-lg", "24px", TokenCategory::Spacing),
            DesignToken::new("font-size-md", "16px", TokenCategory::Typography),
            DesignToken::new("font-weight-bold", "700", TokenCategory::Typography),
            DesignToken::new("line-height-base", "1.5", TokenCategory::Typography),
            DesignToken::new("border-radius-md", "4px", TokenCategory::Border),
        ];
        TokenCatalog::from_parts(tokens, Vec::new()).unwrap()
    }

    #[test]
    fn test_classify_value_shapes() {
        assert_eq!(classify_value("#0066CC"), ValueShape::Color);
        assert_eq!(classify_value("rgb(0, 102, 204)"), ValueShape::Color);
        assert_eq!(classify_value("16px"), ValueShape::Pixel);
        assert_eq!(classify_value("1.5rem"), ValueShape::Rem);
        assert_eq!(classify_value("2em"), ValueShape::Em);
        assert_eq!(classify_value("700"), ValueShape::FontWeight);
        assert_eq!(classify_value("1.5"), ValueShape::Number);
        assert_eq!(classify_value("1000"), ValueShape::Number);
        assert_eq!(classify_value("sans-serif"), ValueShape::Text);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("#FF00AA"), "#ff00aa");
        assert_eq!(normalize("rgb(0, 102, 204)"), "rgb(0,102,204)");
        assert_eq!(normalize(" 16 px "), "16px");
    }

    #[test]
    fn test_find_exact_is_idempotent_over_catalog() {
        let catalog = test_catalog();
        // Matching a token's own stored value always resolves to a
        // token holding that value
        for token in catalog.tokens() {
            let found = find_exact(&token.value, &catalog).unwrap();
            assert_eq!(normalize(&found.value), normalize(&token.value));
        }
    }

    #[test]
    fn test_find_exact_normalized() {
        let catalog = test_catalog();
        let token = find_exact("#0066cc", &catalog).unwrap();
        assert_eq!(token.name, "color-primary");

        let token = find_exact(" 16px ", &catalog).unwrap();
        assert_eq!(token.name, "spacing-md");
    }

    #[test]
    fn test_find_exact_no_match() {
        let catalog = test_catalog();
        assert!(find_exact("#123456", &catalog).is_none());
        assert!(find_exact("17px", &catalog).is_none());
    }

    #[test]
    fn test_suggest_exact_value_in_two_categories() {
        let catalog = test_catalog();
        let results = suggest_migration("16px", &catalog, None);

        // Both the spacing and the typography token valued 16px come
        // back as exact matches
        let exact: Vec<&MatchResult> = results
            .iter()
            .filter(|r| (r.similarity - 1.0).abs() < f64::EPSILON)
            .collect();
        assert_eq!(exact.len(), 2);
        assert!(exact.iter().any(|r| r.token == "spacing-md"));
        assert!(exact.iter().any(|r| r.token == "font-size-md"));
        assert!(exact.iter().all(|r| r.reason == "Exact match"));
    }

    #[test]
    fn test_suggest_category_filter() {
        let catalog = test_catalog();
        let results = suggest_migration("16px", &catalog, Some(TokenCategory::Spacing));
        assert!(results.iter().all(|r| r.token.starts_with("spacing-")));
    }

    #[test]
    fn test_suggest_numeric_closeness() {
        let catalog = test_catalog();
        let results = suggest_migration("15px", &catalog, Some(TokenCategory::Spacing));

        // 16px is the closest: 1 - 1/16 = 0.9375
        assert_eq!(results[0].token, "spacing-md");
        assert!((results[0].similarity - 0.9375).abs() < 1e-9);
        assert_eq!(results[0].reason, "Very close match");

        // 8px scores 1 - 7/15 ~ 0.533 and survives the threshold
        assert!(results.iter().any(|r| r.token == "spacing-sm"));
        // 24px scores 1 - 9/24 = 0.625
        assert!(results.iter().any(|r| r.token == "spacing-lg"));
    }

    #[test]
    fn test_suggest_respects_threshold_and_cap() {
        let catalog = test_catalog();
        let results = suggest_migration("2px", &catalog, None);

        assert!(results.len() <= 5);
        for result in &results {
            assert!(result.similarity >= 0.5, "{} below 0.5", result.token);
        }
        // 16px against 2px scores 1 - 14/16 = 0.125 and is dropped
        assert!(!results.iter().any(|r| r.token == "spacing-md"));
    }

    #[test]
    fn test_suggest_sorted_descending() {
        let catalog = test_catalog();
        let results = suggest_migration("15px", &catalog, None);
        for pair in results.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn test_color_similarity_is_binary() {
        let catalog = test_catalog();

        let exact = suggest_migration("#0066cc", &catalog, None);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].token, "color-primary");
        assert!((exact[0].similarity - 1.0).abs() < f64::EPSILON);

        // A near-miss color scores 0, not a fraction, so nothing comes back
        let near = suggest_migration("#0066CD", &catalog, None);
        assert!(near.is_empty());
    }

    #[test]
    fn test_font_weight_partial_credit() {
        let catalog = test_catalog();
        let results = suggest_migration("400", &catalog, None);

        // 700 is not equal, so it gets the flat 0.5 partial credit
        let bold = results.iter().find(|r| r.token == "font-weight-bold").unwrap();
        assert!((bold.similarity - 0.5).abs() < f64::EPSILON);
        assert_eq!(bold.reason, "Similar value");
    }

    #[test]
    fn test_shape_buckets_do_not_mix() {
        let catalog = test_catalog();
        // A rem query never matches px-valued tokens
        let results = suggest_migration("1rem", &catalog, None);
        assert!(results.is_empty());
    }

    #[test]
    fn test_replacement_is_first_in_catalog_order() {
        let catalog = test_catalog();

        let token = replacement_for_category(TokenCategory::Spacing, &catalog).unwrap();
        assert_eq!(token.name, "spacing-sm");

        let token = replacement_for_category(TokenCategory::Color, &catalog).unwrap();
        assert_eq!(token.name, "color-primary");
    }

    #[test]
    fn test_replacement_missing_category() {
        let catalog = TokenCatalog::from_parts(Vec::new(), Vec::new()).unwrap();
        assert!(replacement_for_category(TokenCategory::Shadow, &catalog).is_none());
    }

    #[test]
    fn test_numeric_similarity_zero_guard() {
        assert!((numeric_similarity(0.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!(numeric_similarity(0.0, 8.0) < f64::EPSILON);
    }
}
