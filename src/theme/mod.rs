//! Brand theme assembly.
//!
//! Two assembly strategies coexist and are selected explicitly per
//! invocation. `Override` starts from the full catalog and rewrites the
//! hue/saturation/lightness base tokens of each overridden color
//! family, so its color output is HSL components. `FullGeneration`
//! ignores the catalog and synthesizes a flat token list from fixed
//! scale tables plus directly-supplied hex values. The two token shapes
//! are not value-compatible and are never mixed.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::TokenCatalog;
use crate::models::{DesignToken, HslColor, RgbColor, TokenCategory};

/// Color families whose scale base tokens can be overridden.
const SCALE_FAMILIES: &[&str] = &["primary", "neutral", "success", "warning", "danger", "info"];

/// Semantic color roles of a fully generated theme, with defaults.
const COLOR_ROLES: &[(&str, &str)] = &[
    ("primary", "#2D6FDB"),
    ("secondary", "#64748B"),
    ("accent", "#7C3AED"),
    ("background", "#FFFFFF"),
    ("surface", "#F1F5F9"),
    ("text", "#0F172A"),
    ("muted", "#94A3B8"),
    ("success", "#16A34A"),
    ("warning", "#D97706"),
    ("danger", "#DC2626"),
];

/// Spacing scale emitted by full generation.
const SPACING_SCALE: &[(&str, &str)] = &[
    ("spacing-xs", "4px"),
    ("spacing-sm", "8px"),
    ("spacing-md", "16px"),
    ("spacing-lg", "24px"),
    ("spacing-xl", "32px"),
    ("spacing-2xl", "48px"),
];

/// Typography scale emitted by full generation.
const TYPOGRAPHY_SCALE: &[(&str, &str)] = &[
    (
        "font-family-base",
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
    ),
    ("font-size-sm", "14px"),
    ("font-size-md", "16px"),
    ("font-size-lg", "18px"),
    ("font-size-xl", "20px"),
    ("font-size-2xl", "24px"),
    ("font-weight-regular", "400"),
    ("font-weight-medium", "500"),
    ("font-weight-bold", "700"),
    ("line-height-base", "1.5"),
];

/// Border scale emitted by full generation.
const BORDER_SCALE: &[(&str, &str)] = &[
    ("border-radius-sm", "2px"),
    ("border-radius-md", "6px"),
    ("border-radius-lg", "12px"),
    ("border-width-thin", "1px"),
];

/// Shadow scale emitted by full generation.
const SHADOW_SCALE: &[(&str, &str)] = &[
    ("shadow-sm", "0 1px 2px rgba(15, 23, 42, 0.06)"),
    ("shadow-md", "0 4px 8px rgba(15, 23, 42, 0.1)"),
    ("shadow-lg", "0 12px 24px rgba(15, 23, 42, 0.12)"),
];

/// Theme assembly strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThemeMode {
    /// Rewrite the catalog's scale base tokens, keep everything else
    #[serde(rename = "override")]
    Override,
    /// Synthesize a flat token list from the generator tables
    #[serde(rename = "full-generation")]
    FullGeneration,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Override => "override",
            Self::FullGeneration => "full-generation",
        };
        f.pad(label)
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "override" => Ok(Self::Override),
            "full" | "full-generation" => Ok(Self::FullGeneration),
            other => anyhow::bail!("Unknown theme mode '{other}'. Expected 'override' or 'full'"),
        }
    }
}

/// Brand color inputs, keyed by role name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColorOverrides(BTreeMap<String, String>);

impl ColorOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hex value for a role. Role validity is checked against
    /// the selected mode at assembly time.
    pub fn set(&mut self, role: impl Into<String>, hex: impl Into<String>) {
        self.0.insert(role.into(), hex.into());
    }

    /// Gets the hex value supplied for a role, if any.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    /// True when no role was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Role names that are not in the given set.
    fn unknown_roles(&self, known: &[&str]) -> Vec<String> {
        self.0
            .keys()
            .filter(|role| !known.contains(&role.as_str()))
            .cloned()
            .collect()
    }
}

/// An assembled theme: a named token set plus its assembly mode.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    /// Brand name
    pub name: String,
    /// Strategy the token set was assembled with
    pub mode: ThemeMode,
    /// Tokens, grouped by category in catalog/table order
    pub tokens: Vec<DesignToken>,
}

/// Converts a brand hex color to its HSL triple.
///
/// Hue is rounded to the nearest degree and saturation/lightness to the
/// nearest percent, matching the scale tokens' stored precision.
///
/// # Errors
///
/// Returns an error for malformed hex input.
pub fn hex_to_hsl(hex: &str) -> Result<HslColor> {
    Ok(RgbColor::from_hex(hex)?.to_hsl())
}

/// Assembles a brand theme with the chosen strategy.
///
/// # Errors
///
/// Returns an error if an override hex is malformed or a supplied role
/// is unknown to the chosen mode.
pub fn assemble_theme(
    name: &str,
    colors: &ColorOverrides,
    mode: ThemeMode,
    catalog: &TokenCatalog,
) -> Result<Theme> {
    match mode {
        ThemeMode::Override => assemble_override(name, colors, catalog),
        ThemeMode::FullGeneration => generate_full(name, colors),
    }
}

/// Catalog-override assembly: the full catalog with each overridden
/// family's three scale base tokens rewritten from the brand hex.
fn assemble_override(name: &str, colors: &ColorOverrides, catalog: &TokenCatalog) -> Result<Theme> {
    let unknown = colors.unknown_roles(SCALE_FAMILIES);
    if !unknown.is_empty() {
        anyhow::bail!(
            "Unknown color famil{} {} for override mode. Expected one of: {}",
            if unknown.len() > 1 { "ies" } else { "y" },
            unknown.join(", "),
            SCALE_FAMILIES.join(", ")
        );
    }

    let mut tokens = catalog.tokens().to_vec();

    for family in SCALE_FAMILIES {
        let Some(hex) = colors.get(family) else {
            continue;
        };
        let hsl = hex_to_hsl(hex)?;
        set_token_value(&mut tokens, &format!("color-{family}-hue"), hsl.hue.to_string());
        set_token_value(
            &mut tokens,
            &format!("color-{family}-saturation"),
            format!("{}%", hsl.saturation),
        );
        set_token_value(
            &mut tokens,
            &format!("color-{family}-lightness"),
            format!("{}%", hsl.lightness),
        );
    }

    Ok(Theme {
        name: name.to_string(),
        mode: ThemeMode::Override,
        tokens,
    })
}

/// Full-generation assembly: fixed scale tables plus the ten semantic
/// color roles, each taking the supplied hex directly or its default.
fn generate_full(name: &str, colors: &ColorOverrides) -> Result<Theme> {
    let known: Vec<&str> = COLOR_ROLES.iter().map(|(role, _)| *role).collect();
    let unknown = colors.unknown_roles(&known);
    if !unknown.is_empty() {
        anyhow::bail!(
            "Unknown color role{} {} for full generation. Expected one of: {}",
            if unknown.len() > 1 { "s" } else { "" },
            unknown.join(", "),
            known.join(", ")
        );
    }

    let mut tokens = Vec::new();

    for &(role, default_hex) in COLOR_ROLES {
        let hex = colors.get(role).unwrap_or(default_hex);
        // Validate, but emit the supplied literal untouched
        RgbColor::from_hex(hex)?;
        tokens.push(DesignToken::new(
            format!("color-{role}"),
            hex,
            TokenCategory::Color,
        ));
    }
    for &(name, value) in SPACING_SCALE {
        tokens.push(DesignToken::new(name, value, TokenCategory::Spacing));
    }
    for &(name, value) in TYPOGRAPHY_SCALE {
        tokens.push(DesignToken::new(name, value, TokenCategory::Typography));
    }
    for &(name, value) in BORDER_SCALE {
        tokens.push(DesignToken::new(name, value, TokenCategory::Border));
    }
    for &(name, value) in SHADOW_SCALE {
        tokens.push(DesignToken::new(name, value, TokenCategory::Shadow));
    }

    Ok(Theme {
        name: name.to_string(),
        mode: ThemeMode::FullGeneration,
        tokens,
    })
}

/// Rewrites the value of the named token in place, if present.
fn set_token_value(tokens: &mut [DesignToken], name: &str, value: String) {
    if let Some(token) = tokens.iter_mut().find(|t| t.name == name) {
        token.value = value;
    }
}

impl Theme {
    /// Renders the theme as a CSS custom-property block, grouped by
    /// category. Token values are emitted exactly as stored.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        css.push_str(&format!("/* {} design tokens */\n", self.name));
        css.push_str(":root {\n");

        let mut first_group = true;
        for category in TokenCategory::ALL {
            let group: Vec<&DesignToken> = self
                .tokens
                .iter()
                .filter(|t| t.category == category)
                .collect();
            if group.is_empty() {
                continue;
            }

            if !first_group {
                css.push('\n');
            }
            first_group = false;

            css.push_str(&format!("  /* {category} */\n"));
            for token in group {
                css.push_str(&format!("  --{}: {};\n", token.name, token.value));
            }
        }

        css.push_str("}\n");
        css
    }
}
