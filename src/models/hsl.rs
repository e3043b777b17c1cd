//! HSL color representation and conversion back to RGB.

// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};

use super::Rgb;

/// HSL color: hue in degrees, saturation and lightness in `[0, 1]`.
///
/// Hue is kept in `[0, 360)` by construction; conversions normalize it
/// internally before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0.0-360.0, 0.0 for achromatic colors)
    pub h: f64,
    /// Saturation (0.0-1.0)
    pub s: f64,
    /// Lightness (0.0-1.0)
    pub l: f64,
}

impl Hsl {
    /// Creates a new `Hsl` from hue (degrees), saturation, and lightness.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts the HSL color back to normalized RGB.
    ///
    /// Zero saturation yields the achromatic shortcut where all channels
    /// equal the lightness. Chromatic colors go through the standard
    /// piecewise-linear p/q formulation, sampling the hue ramp at
    /// +1/3, 0, and -1/3 of a turn for red, green, and blue.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::new(self.l, self.l, self.l);
        }

        let h = self.h / 360.0;
        let (s, l) = (self.s, self.l);

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }
}

/// Samples one channel from the piecewise-linear hue ramp.
///
/// `t` is a fractional hue position; it is wrapped into `[0, 1)` before
/// the four-segment lookup.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
