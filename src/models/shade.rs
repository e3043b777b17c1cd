//! Bounded shade index for the 9-step tonal scale.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of the tonal scale, indexed 1-9 and labeled 100-900.
///
/// Shade 500 is the midpoint that reproduces the seed color; lower
/// labels are lighter tints, higher labels darker shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shade(u8);

impl Shade {
    /// The midpoint shade (label 500) that reproduces the seed color.
    pub const MIDPOINT: Self = Self(5);

    /// All 9 shades in ascending label order (100 through 900).
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a shade from its index (1-9), or `None` when out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index >= 1 && index <= 9 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Creates a shade from its label (100, 200, ..., 900).
    ///
    /// Labels that are not an exact multiple of 100 in range are rejected.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_label(label: u16) -> Option<Self> {
        if label % 100 != 0 || label > 900 {
            return None;
        }
        Self::from_index((label / 100) as u8)
    }

    /// Returns the index (1-9).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the label (100-900).
    #[must_use]
    pub const fn label(self) -> u16 {
        self.0 as u16 * 100
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Shade {
    /// Serializes as the label (100-900), never the internal index.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.label())
    }
}
