//! Design token and component data structures.
//!
//! Tokens are immutable once loaded; all engine operations borrow them
//! from the catalog and never mutate them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a design token, matching the sections of a design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// Color values (hex literals, `rgb()` calls, or bare HSL scale components)
    Color,
    /// Spacing values (padding, margin, gap, sizing)
    Spacing,
    /// Typography values (font families, sizes, weights, line heights)
    Typography,
    /// Border values (radii, widths)
    Border,
    /// Shadow values (`box-shadow` literals)
    Shadow,
}

impl TokenCategory {
    /// All categories, in the order they are grouped in generated output.
    pub const ALL: [Self; 5] = [
        Self::Color,
        Self::Spacing,
        Self::Typography,
        Self::Border,
        Self::Shadow,
    ];

    /// Lowercase identifier used in JSON data and CLI arguments.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Border => "border",
            Self::Shadow => "shadow",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for TokenCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" => Ok(Self::Color),
            "spacing" => Ok(Self::Spacing),
            "typography" => Ok(Self::Typography),
            "border" => Ok(Self::Border),
            "shadow" => Ok(Self::Shadow),
            other => anyhow::bail!(
                "Unknown token category '{other}'. Expected one of: color, spacing, typography, border, shadow"
            ),
        }
    }
}

/// A named design constant with a literal CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignToken {
    /// Token name, unique within a catalog (e.g., "color-primary")
    pub name: String,
    /// Literal CSS value (e.g., "#0066CC", "16px")
    pub value: String,
    /// Category the value belongs to
    pub category: TokenCategory,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DesignToken {
    /// Creates a new token without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            category,
            description: None,
        }
    }
}

/// A UI component and the tokens it is built from.
///
/// Token references are plain names and are not checked against the
/// token catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component name (e.g., "button")
    pub name: String,
    /// What the component is for
    pub description: String,
    /// Names of the tokens the component uses, in display order
    #[serde(default)]
    pub tokens: Vec<String>,
    /// Usage guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Markup or code examples
    #[serde(default)]
    pub examples: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "color".parse::<TokenCategory>().unwrap(),
            TokenCategory::Color
        );
        assert_eq!(
            " Spacing ".parse::<TokenCategory>().unwrap(),
            TokenCategory::Spacing
        );
        assert!("colour".parse::<TokenCategory>().is_err());
        assert!("".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn test_category_roundtrip_through_id() {
        for category in TokenCategory::ALL {
            assert_eq!(category.id().parse::<TokenCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_token_json_shape() {
        let json = r##"{"name":"color-primary","value":"#0066CC","category":"color"}"##;
        let token: DesignToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.name, "color-primary");
        assert_eq!(token.category, TokenCategory::Color);
        assert!(token.description.is_none());
    }

    #[test]
    fn test_component_defaults() {
        let json = r#"{"name":"button","description":"A button"}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert!(component.tokens.is_empty());
        assert!(component.usage.is_none());
        assert!(component.examples.is_empty());
    }
}
