//! Normalized RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hsl;

/// Normalized RGB color with each channel in `[0, 1]`.
///
/// Channels are stored as `value / 255` of the original 8-bit hex digits,
/// matching the representation design-tool variable stores expect.
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0.0-1.0)
    pub r: f64,
    /// Green channel (0.0-1.0)
    pub g: f64,
    /// Blue channel (0.0-1.0)
    pub b: f64,
}

impl Rgb {
    /// Creates a new `Rgb` from normalized channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses an `Rgb` from a hex string.
    ///
    /// Accepts exactly 6 hex digits with an optional `#` prefix
    /// ("#RRGGBB" or "RRGGBB", case-insensitive). Shorthand 3-digit and
    /// 8-digit alpha forms are rejected, as is any surrounding whitespace.
    ///
    /// Returns `None` for anything that does not match; callers decide
    /// whether that is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandtone::models::Rgb;
    ///
    /// let color = Rgb::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, Rgb::new(1.0, 0.0, 0.0));
    ///
    /// assert!(Rgb::from_hex("#FFF").is_none());
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// Channels are clamped to `[0, 1]` and rounded to the nearest 8-bit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandtone::models::Rgb;
    ///
    /// let color = Rgb::new(1.0, 0.0, 0.0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            Self::to_byte(self.r),
            Self::to_byte(self.g),
            Self::to_byte(self.b)
        )
    }

    fn to_byte(channel: f64) -> u8 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Converts the RGB color to HSL color space.
    ///
    /// Returns an [`Hsl`] where hue is 0.0-360.0 degrees (0.0 for grays)
    /// and saturation/lightness are 0.0-1.0.
    ///
    /// When two channels exactly equal the maximum, the hue branch is
    /// selected in r, g, b order. Alternate orderings produce different
    /// hues for degenerate inputs like pure cyan, so the order is fixed.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = (self.r, self.g, self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic, hue is undefined
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h / 6.0 * 360.0, s, l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
