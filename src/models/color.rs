//! Color value handling: hex/rgb() parsing, HSL conversion, and WCAG
//! contrast math.
//!
//! All functions are pure; parse failures are returned as errors and
//! never coerced to a fallback color.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG 2.1 minimum contrast ratio for normal text at level AA.
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// WCAG 2.1 minimum contrast ratio for normal text at level AAA.
pub const WCAG_AAA_NORMAL: f64 = 7.0;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings and `rgb()`/`rgba()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// HSL triple with integer components, as emitted into scale tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees, 0-359
    pub hue: u16,
    /// Saturation percentage, 0-100
    pub saturation: u8,
    /// Lightness percentage, 0-100
    pub lightness: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports 6-digit ("#RRGGBB") and 3-digit ("#RGB") forms, with or
    /// without the leading `#`, in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenlens::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("0CF").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 204, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let expanded;
        let digits = match hex.len() {
            6 => hex,
            3 => {
                expanded = hex.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            _ => anyhow::bail!(
                "Invalid hex color '{hex}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
        };

        let r = u8::from_str_radix(&digits[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a color from any textual form the engine recognizes: a hex
    /// literal or an `rgb()`/`rgba()` call.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither hex- nor rgb-shaped.
    pub fn parse_css(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        if trimmed.to_lowercase().starts_with("rgb") {
            return Self::from_rgb_call(trimmed);
        }
        // Bare hex digits without the leading '#'
        if matches!(trimmed.len(), 3 | 6) && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(trimmed);
        }

        anyhow::bail!("'{trimmed}' is not a recognized color format (expected hex or rgb()/rgba())")
    }

    /// Parses an `rgb(r, g, b)` or `rgba(r, g, b, a)` call. The alpha
    /// component, if present, is ignored. Both comma- and
    /// space-separated channel lists are accepted.
    fn from_rgb_call(value: &str) -> Result<Self> {
        let lower = value.trim().to_lowercase();
        let inner = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| anyhow::anyhow!("'{value}' is not a valid rgb()/rgba() call"))?;

        let parts: Vec<&str> = if inner.contains(',') {
            inner.split(',').map(str::trim).collect()
        } else {
            // Modern space-separated syntax: "rgb(255 0 0 / 0.5)"
            inner.split('/').next().unwrap_or(inner).split_whitespace().collect()
        };

        if parts.len() < 3 {
            anyhow::bail!("'{value}' must supply three channel values");
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let channel: f64 = part
                .parse()
                .context(format!("Invalid channel '{part}' in '{value}'"))?;
            if !(0.0..=255.0).contains(&channel) {
                anyhow::bail!("Channel '{part}' in '{value}' is out of range 0-255");
            }
            *slot = channel.round() as u8;
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL with integer-rounded components.
    ///
    /// Hue is rounded to the nearest degree and saturation/lightness to
    /// the nearest percent. Achromatic colors yield hue 0 and
    /// saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenlens::models::{HslColor, RgbColor};
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(
    ///     red.to_hsl(),
    ///     HslColor { hue: 0, saturation: 100, lightness: 50 }
    /// );
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic, hue is undefined
            return HslColor {
                hue: 0,
                saturation: 0,
                lightness: (l * 100.0).round() as u8,
            };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        HslColor {
            hue: (h.round() as u16) % 360,
            saturation: (s * 100.0).round() as u8,
            lightness: (l * 100.0).round() as u8,
        }
    }

    /// Relative luminance per WCAG 2.1 (ITU-R BT.709 weights).
    ///
    /// Each channel is gamma-decoded with the piecewise sRGB transfer
    /// function (linear segment below 0.03928, power curve 2.4 above).
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let v = f64::from(channel) / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// WCAG 2.1 contrast ratio between two colors.
///
/// Computed as `(L_lighter + 0.05) / (L_darker + 0.05)`; the result is
/// in the range 1.0 to 21.0 and independent of argument order.
#[must_use]
pub fn contrast_ratio(a: &RgbColor, b: &RgbColor) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two textual color values (hex or rgb-shaped).
///
/// # Errors
///
/// Returns an error if either value cannot be parsed as a color.
pub fn contrast_ratio_css(a: &str, b: &str) -> Result<f64> {
    let ca = RgbColor::parse_css(a)?;
    let cb = RgbColor::parse_css(b)?;
    Ok(contrast_ratio(&ca, &cb))
}

/// WCAG conformance level reached by a contrast ratio (normal text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Below 4.5:1
    #[serde(rename = "fail")]
    Fail,
    /// At least 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1
    #[serde(rename = "AAA")]
    Aaa,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fail => "fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        };
        f.pad(label)
    }
}

/// Pass/fail classification of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastRating {
    /// Ratio rounded to 2 decimal places for reporting
    pub ratio: f64,
    /// True if the ratio meets WCAG AA for normal text (4.5:1)
    pub passes_aa: bool,
    /// True if the ratio meets WCAG AAA for normal text (7:1)
    pub passes_aaa: bool,
    /// Best level reached
    pub level: ContrastLevel,
}

/// Classifies a contrast ratio against the WCAG 2.1 normal-text
/// thresholds.
///
/// The pass/fail comparison uses the full-precision ratio; only the
/// reported `ratio` field is rounded.
#[must_use]
pub fn classify_contrast(ratio: f64) -> ContrastRating {
    let passes_aa = ratio >= WCAG_AA_NORMAL;
    let passes_aaa = ratio >= WCAG_AAA_NORMAL;
    let level = if passes_aaa {
        ContrastLevel::Aaa
    } else if passes_aa {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    };

    ContrastRating {
        ratio: (ratio * 100.0).round() / 100.0,
        passes_aa,
        passes_aaa,
        level,
    }
}
