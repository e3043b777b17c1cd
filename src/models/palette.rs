//! Generated brand palette: an ordered shade-to-color mapping.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Rgb, Shade};

/// One entry of a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteEntry {
    /// The shade this entry belongs to.
    pub shade: Shade,
    /// The derived color for this shade.
    pub color: Rgb,
}

/// A complete 9-shade brand palette in ascending label order.
///
/// Always holds exactly one entry per shade label 100 through 900;
/// construction from anything else is not exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPalette {
    entries: [PaletteEntry; 9],
}

impl BrandPalette {
    /// Assembles a palette from one color per shade, in `Shade::ALL` order.
    #[must_use]
    pub(crate) fn from_colors(colors: [Rgb; 9]) -> Self {
        let entries = std::array::from_fn(|i| PaletteEntry {
            shade: Shade::ALL[i],
            color: colors[i],
        });
        Self { entries }
    }

    /// Returns the color for a shade.
    #[must_use]
    pub fn color(&self, shade: Shade) -> Rgb {
        self.entries[usize::from(shade.index()) - 1].color
    }

    /// Iterates entries in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Number of entries; always 9.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API completeness.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a BrandPalette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for BrandPalette {
    /// Serializes as a map keyed by shade label ("100" through "900"),
    /// preserving ascending order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.shade.label().to_string(), &entry.color)?;
        }
        map.end()
    }
}
