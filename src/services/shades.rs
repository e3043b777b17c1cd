//! Shade interpolation policy for the 9-step tonal scale.
//!
//! Shade 500 reproduces the seed; shades below it ramp toward a light,
//! desaturated tint and shades above it toward a dark, saturated tone.
//! Each side is a linear ramp in 4 equal steps between the seed value
//! and a fixed boundary constant, with hue held fixed throughout.

use crate::models::{Hsl, Shade};

/// Saturation floor for the lightest tint (shade 100).
pub const MIN_SATURATION: f64 = 0.05;
/// Saturation ceiling for the darkest tone (shade 900).
pub const MAX_SATURATION: f64 = 1.0;
/// Lightness floor for the darkest tone (shade 900).
pub const MIN_LIGHTNESS: f64 = 0.05;
/// Lightness ceiling for the lightest tint (shade 100).
pub const MAX_LIGHTNESS: f64 = 0.98;

/// Seeds with saturation below this are treated as gray.
pub const GRAY_SATURATION_THRESHOLD: f64 = 0.01;

/// Computes the HSL values for one shade of the scale.
///
/// The seed hue is never altered. Gray seeds (saturation below
/// [`GRAY_SATURATION_THRESHOLD`], so white/black/gray) pin saturation to
/// zero and vary only lightness. The midpoint shade returns the seed
/// values unchanged apart from that gray override.
///
/// A seed already past a boundary constant collapses every shade on
/// that side to the boundary itself; see [`lower_value`].
#[must_use]
pub fn generate_shade(seed: Hsl, shade: Shade) -> Hsl {
    let Hsl { h, s, l } = seed;

    let lower_s = (s - MIN_SATURATION) / 4.0;
    let upper_s = (MAX_SATURATION - s) / 4.0;
    let lower_l = (l - MIN_LIGHTNESS) / 4.0;
    let upper_l = (MAX_LIGHTNESS - l) / 4.0;

    let index = shade.index();

    if s < GRAY_SATURATION_THRESHOLD {
        let new_l = if index == 5 {
            l
        } else if index < 5 {
            upper_value(l, MAX_LIGHTNESS, upper_l, index)
        } else {
            lower_value(l, MIN_LIGHTNESS, lower_l, 10 - index)
        };
        return Hsl::new(h, 0.0, new_l);
    }

    let (new_s, new_l) = if index == 5 {
        (s, l)
    } else if index < 5 {
        (
            lower_value(s, MIN_SATURATION, lower_s, index),
            upper_value(l, MAX_LIGHTNESS, upper_l, index),
        )
    } else {
        (
            upper_value(s, MAX_SATURATION, upper_s, 10 - index),
            lower_value(l, MIN_LIGHTNESS, lower_l, 10 - index),
        )
    };

    Hsl::new(h, new_s, new_l)
}

/// Linear ramp from `min` (at step 1) toward the seed value (at step 5).
///
/// Clamps to `min` when the seed is already below the floor, so
/// abnormally dark or desaturated seeds cannot push a shade past it.
fn lower_value(val: f64, min: f64, increment: f64, step: u8) -> f64 {
    if val < min || step == 1 {
        min
    } else {
        min + increment * f64::from(step - 1)
    }
}

/// Mirror of [`lower_value`]: ramp from `max` (at step 1) toward the seed.
fn upper_value(val: f64, max: f64, increment: f64, step: u8) -> f64 {
    if val > max || step == 1 {
        max
    } else {
        max - increment * f64::from(step - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn shade(label: u16) -> Shade {
        Shade::from_label(label).unwrap()
    }

    #[test]
    fn test_midpoint_identity() {
        let seed = Hsl::new(225.0, 0.7, 0.6);
        let mid = generate_shade(seed, shade(500));
        assert_eq!(mid, seed);
    }

    #[test]
    fn test_midpoint_gray_pins_saturation() {
        let seed = Hsl::new(225.0, 0.005, 0.6);
        let mid = generate_shade(seed, shade(500));
        assert_eq!(mid, Hsl::new(225.0, 0.0, 0.6));
    }

    #[test]
    fn test_hue_never_changes() {
        let seed = Hsl::new(42.0, 0.5, 0.5);
        for s in Shade::ALL {
            assert!((generate_shade(seed, s).h - 42.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_extreme_shades_hit_boundaries() {
        let seed = Hsl::new(200.0, 0.5, 0.5);

        let lightest = generate_shade(seed, shade(100));
        assert!((lightest.s - MIN_SATURATION).abs() < TOLERANCE);
        assert!((lightest.l - MAX_LIGHTNESS).abs() < TOLERANCE);

        let darkest = generate_shade(seed, shade(900));
        assert!((darkest.s - MAX_SATURATION).abs() < TOLERANCE);
        assert!((darkest.l - MIN_LIGHTNESS).abs() < TOLERANCE);
    }

    #[test]
    fn test_four_equal_steps_per_side() {
        let seed = Hsl::new(0.0, 0.5, 0.5);
        // Lightness on the dark side: 0.5 at 500, then equal decrements
        // of (0.5 - 0.05) / 4 down to 0.05 at 900.
        let step = (0.5 - MIN_LIGHTNESS) / 4.0;
        for (label, expected) in [(600, 0.5 - step), (700, 0.5 - 2.0 * step), (800, 0.5 - 3.0 * step), (900, MIN_LIGHTNESS)] {
            let got = generate_shade(seed, shade(label)).l;
            assert!((got - expected).abs() < TOLERANCE, "shade {label}: {got}");
        }
    }

    #[test]
    fn test_monotonic_ramps() {
        let seed = Hsl::new(300.0, 0.42, 0.58);
        let results: Vec<Hsl> = Shade::ALL.iter().map(|s| generate_shade(seed, *s)).collect();

        for pair in results.windows(2) {
            assert!(pair[1].l <= pair[0].l + TOLERANCE, "lightness must not increase");
            assert!(pair[1].s >= pair[0].s - TOLERANCE, "saturation must not decrease");
        }
    }

    #[test]
    fn test_gray_seed_varies_only_lightness() {
        let seed = Hsl::new(0.0, 0.0, 0.5);
        for s in Shade::ALL {
            let result = generate_shade(seed, s);
            assert_eq!(result.s, 0.0);
            assert_eq!(result.h, 0.0);
        }
        // Still a full light-to-dark ramp
        assert!((generate_shade(seed, shade(100)).l - MAX_LIGHTNESS).abs() < TOLERANCE);
        assert!((generate_shade(seed, shade(900)).l - MIN_LIGHTNESS).abs() < TOLERANCE);
    }

    #[test]
    fn test_seed_below_floor_collapses_side() {
        // Lightness below the floor: every dark shade sits on the floor.
        let seed = Hsl::new(10.0, 0.5, 0.03);
        for label in [600, 700, 800, 900] {
            let result = generate_shade(seed, shade(label));
            assert!((result.l - MIN_LIGHTNESS).abs() < TOLERANCE, "shade {label}");
        }
        // The midpoint still reproduces the seed exactly.
        assert_eq!(generate_shade(seed, shade(500)).l, 0.03);
    }

    #[test]
    fn test_saturated_seed_clamps_dark_side() {
        // Seed at max saturation: increment is zero, dark shades stay at 1.0.
        let seed = Hsl::new(225.0, 1.0, 0.6);
        for label in [600, 700, 800, 900] {
            let result = generate_shade(seed, shade(label));
            assert!((result.s - MAX_SATURATION).abs() < TOLERANCE, "shade {label}");
        }
    }

    #[test]
    fn test_worked_example_3366ff_dark_ramp() {
        // Seed #3366FF in HSL: (225, 1.0, 0.6). The dark side steps
        // lightness down by (0.6 - 0.05) / 4 = 0.1375 per shade.
        let seed = Hsl::new(225.0, 1.0, 0.6);
        let expected = [(600, 0.4625), (700, 0.325), (800, 0.1875), (900, 0.05)];
        for (label, l) in expected {
            let result = generate_shade(seed, shade(label));
            assert!((result.l - l).abs() < TOLERANCE, "shade {label}: {}", result.l);
            assert!((result.s - 1.0).abs() < TOLERANCE);
        }
    }
}
