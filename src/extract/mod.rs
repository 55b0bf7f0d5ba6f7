//! Literal style value extraction from raw source text.
//!
//! Extraction is rule-driven: each kind of value carries its property
//! list and value grammar in a table, and the scanner compiles each
//! rule to a regex and applies them independently. This is deliberately
//! not a CSS parser; it recognizes known property/value shapes anywhere
//! in the text, including inline styles and style objects.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::models::TokenCategory;

/// Kind of literal value an extraction rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractedKind {
    /// Hex literals and rgb()/rgba() calls
    Color,
    /// Numeric px/rem/em values on box-model properties
    Spacing,
    /// font-size declarations
    FontSize,
    /// font-weight declarations
    FontWeight,
    /// font-family declarations
    FontFamily,
    /// border-radius declarations
    BorderRadius,
    /// box-shadow / text-shadow declarations
    Shadow,
}

impl ExtractedKind {
    /// Token category this kind of value belongs to.
    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Color => TokenCategory::Color,
            Self::Spacing => TokenCategory::Spacing,
            Self::FontSize | Self::FontWeight | Self::FontFamily => TokenCategory::Typography,
            Self::BorderRadius => TokenCategory::Border,
            Self::Shadow => TokenCategory::Shadow,
        }
    }

    /// Kebab-case identifier used in output.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::FontFamily => "font-family",
            Self::BorderRadius => "border-radius",
            Self::Shadow => "shadow",
        }
    }
}

impl fmt::Display for ExtractedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// A literal value found in scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedValue {
    /// Kind of value
    pub kind: ExtractedKind,
    /// The literal as it appears in the text, trimmed
    pub literal: String,
    /// Property name the value was declared under, when the rule is
    /// property-bound (the color rule is not)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// 1-based line number of the match
    pub line: usize,
}

/// One extraction rule: a kind, the properties it is bound to (empty
/// for property-agnostic rules), and the value grammar.
struct ExtractionRule {
    kind: ExtractedKind,
    /// Property names the value must be declared under; empty means the
    /// value pattern matches anywhere in the text
    properties: &'static [&'static str],
    /// Whether hyphenated sub-properties also match (padding-left etc.)
    subproperties: bool,
    /// Regex fragment for the accepted value
    value_pattern: &'static str,
}

/// The rule table. Order matters: earlier rules claim their match spans
/// first, so a literal is never reported under two kinds. The color
/// rule is first and property-agnostic: a bare hex anywhere in the
/// text is still a color.
const RULES: &[ExtractionRule] = &[
    ExtractionRule {
        kind: ExtractedKind::Color,
        properties: &[],
        subproperties: false,
        value_pattern: r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b|(?i:rgba?\([^)]*\))",
    },
    ExtractionRule {
        kind: ExtractedKind::Spacing,
        properties: &[
            "padding", "margin", "gap", "width", "height", "top", "bottom", "left", "right",
        ],
        subproperties: true,
        value_pattern: r"-?\d*\.?\d+(?:px|rem|em)\b",
    },
    ExtractionRule {
        kind: ExtractedKind::FontSize,
        properties: &["font-size"],
        subproperties: false,
        value_pattern: r"\d*\.?\d+(?:px|rem|em|pt|%)",
    },
    ExtractionRule {
        kind: ExtractedKind::FontWeight,
        properties: &["font-weight"],
        subproperties: false,
        value_pattern: r"[1-9]00\b|normal\b|bolder\b|bold\b|lighter\b",
    },
    ExtractionRule {
        kind: ExtractedKind::FontFamily,
        properties: &["font-family"],
        subproperties: false,
        value_pattern: r"[^;}\n]+",
    },
    ExtractionRule {
        kind: ExtractedKind::BorderRadius,
        properties: &["border-radius"],
        subproperties: false,
        value_pattern: r"\d*\.?\d+(?:px|rem|em|%)",
    },
    ExtractionRule {
        kind: ExtractedKind::Shadow,
        properties: &["box-shadow", "text-shadow"],
        subproperties: false,
        value_pattern: r"[^;}\n]+",
    },
];

impl ExtractionRule {
    /// Compiles the rule into a regex. Property-bound rules capture the
    /// property in group 1 and the value in group 2; property-agnostic
    /// rules capture the value in group 1.
    fn compile(&self) -> Result<Regex> {
        let pattern = if self.properties.is_empty() {
            format!("({})", self.value_pattern)
        } else {
            let suffix = if self.subproperties { "(?:-[a-z]+)*" } else { "" };
            format!(
                r"(?i)(?:^|[\s{{;])((?:{}){})\s*:\s*({})",
                self.properties.join("|"),
                suffix,
                self.value_pattern
            )
        };
        Regex::new(&pattern).context(format!(
            "Invalid extraction pattern for kind '{}'",
            self.kind
        ))
    }
}

/// Scans text for literal style values of every known kind.
///
/// Rules are applied independently; overlapping extractions of
/// different spans (a color inside a shadow value, for example) are
/// left to the caller. The same span is never reported under two
/// kinds.
///
/// # Errors
///
/// Returns an error only if a rule pattern fails to compile.
pub fn extract_values(text: &str) -> Result<Vec<ExtractedValue>> {
    let mut results = Vec::new();
    let mut claimed: HashSet<(usize, usize)> = HashSet::new();

    for rule in RULES {
        let regex = rule.compile()?;
        for captures in regex.captures_iter(text) {
            let (property, value) = if rule.properties.is_empty() {
                (None, captures.get(1))
            } else {
                (captures.get(1), captures.get(2))
            };
            let Some(value) = value else { continue };

            let literal = value.as_str().trim();
            if literal.is_empty() {
                continue;
            }

            let span = (value.start(), value.start() + literal.len());
            if !claimed.insert(span) {
                continue;
            }

            results.push(ExtractedValue {
                kind: rule.kind,
                literal: literal.to_string(),
                property: property.map(|p| p.as_str().to_lowercase()),
                line: line_of(text, value.start()),
            });
        }
    }

    Ok(results)
}

/// 1-based line number of a byte offset.
fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(values: &[ExtractedValue]) -> Vec<ExtractedKind> {
        values.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_extract_css_rule() {
        let text = ".button { background: #0066CC; padding: 16px; font-size: 14px; }";
        let values = extract_values(text).unwrap();

        assert_eq!(values.len(), 3);

        let color = values.iter().find(|v| v.kind == ExtractedKind::Color).unwrap();
        assert_eq!(color.literal, "#0066CC");
        assert!(color.property.is_none());

        let spacing = values.iter().find(|v| v.kind == ExtractedKind::Spacing).unwrap();
        assert_eq!(spacing.literal, "16px");
        assert_eq!(spacing.property.as_deref(), Some("padding"));

        let size = values.iter().find(|v| v.kind == ExtractedKind::FontSize).unwrap();
        assert_eq!(size.literal, "14px");
        assert_eq!(size.property.as_deref(), Some("font-size"));
    }

    #[test]
    fn test_bare_hex_is_still_a_color() {
        // Color extraction is property-agnostic
        let values = extract_values("const brand = '#FF5733';").unwrap();
        assert_eq!(kinds_of(&values), vec![ExtractedKind::Color]);
        assert_eq!(values[0].literal, "#FF5733");
    }

    #[test]
    fn test_short_hex_and_rgb_calls() {
        let values = extract_values("color: #fff; border-color: rgba(0, 0, 0, 0.2);").unwrap();
        let literals: Vec<&str> = values.iter().map(|v| v.literal.as_str()).collect();
        assert!(literals.contains(&"#fff"));
        assert!(literals.contains(&"rgba(0, 0, 0, 0.2)"));
    }

    #[test]
    fn test_invalid_hex_lengths_ignored() {
        let values = extract_values("color: #ABCD; mask: #ABCDEF01;").unwrap();
        assert!(values.iter().all(|v| v.kind != ExtractedKind::Color));
    }

    #[test]
    fn test_spacing_subproperties() {
        let values = extract_values("margin-top: 8px; padding-left: 1.5rem;").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].property.as_deref(), Some("margin-top"));
        assert_eq!(values[1].literal, "1.5rem");
        assert_eq!(values[1].property.as_deref(), Some("padding-left"));
    }

    #[test]
    fn test_spacing_requires_known_property() {
        // A unit value on an unknown property is not a spacing extraction
        let values = extract_values("flex-basis: 200px;").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_spacing_requires_unit() {
        let values = extract_values("line-height: 1.5; z-index: 10;").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_font_weight_forms() {
        let values = extract_values("font-weight: 700; font-weight: bold;").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].literal, "700");
        assert_eq!(values[1].literal, "bold");
        assert!(values.iter().all(|v| v.kind == ExtractedKind::FontWeight));
    }

    #[test]
    fn test_font_family_free_text() {
        let values = extract_values("font-family: 'Inter', Helvetica, sans-serif;").unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].kind, ExtractedKind::FontFamily);
        assert_eq!(values[0].literal, "'Inter', Helvetica, sans-serif");
    }

    #[test]
    fn test_border_radius() {
        let values = extract_values("border-radius: 4px;").unwrap();
        assert_eq!(kinds_of(&values), vec![ExtractedKind::BorderRadius]);
        assert_eq!(values[0].literal, "4px");
    }

    #[test]
    fn test_shadow_overlaps_inner_color() {
        // The rgba inside the shadow is its own color extraction; the
        // full shadow value is a separate span
        let values = extract_values("box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);").unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.iter().any(|v| v.kind == ExtractedKind::Color
            && v.literal == "rgba(0, 0, 0, 0.1)"));
        assert!(values.iter().any(|v| v.kind == ExtractedKind::Shadow
            && v.literal == "0 1px 2px rgba(0, 0, 0, 0.1)"));
    }

    #[test]
    fn test_unrelated_property_names_do_not_match() {
        // "right" in "border-right" is not a standalone property, and
        // "size" in "font-size" never triggers the spacing rule
        let values = extract_values("border-right: 2px;").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_line_numbers() {
        let text = ".a {\n  color: #111111;\n  padding: 4px;\n}";
        let values = extract_values(text).unwrap();
        let color = values.iter().find(|v| v.kind == ExtractedKind::Color).unwrap();
        assert_eq!(color.line, 2);
        let spacing = values.iter().find(|v| v.kind == ExtractedKind::Spacing).unwrap();
        assert_eq!(spacing.line, 3);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_values("").unwrap().is_empty());
    }
}
