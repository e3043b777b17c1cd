//! Palette generation from a seed hex color.

use crate::models::{BrandPalette, PaletteError, Rgb, Shade};
use crate::services::shades::generate_shade;

/// Generates the full 9-shade brand palette from a seed hex color.
///
/// The seed is parsed, converted to HSL once, interpolated per shade,
/// and converted back to normalized RGB. Deterministic and free of side
/// effects; the same input always yields the same palette.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidColorInput`] when the seed does not
/// match the 6-digit hex pattern. No partial palette is produced.
///
/// # Examples
///
/// ```
/// use brandtone::services::generate_brand_colors;
/// use brandtone::models::Shade;
///
/// let palette = generate_brand_colors("#3366FF")?;
/// assert_eq!(palette.len(), 9);
/// assert_eq!(palette.color(Shade::MIDPOINT).to_hex(), "#3366FF");
/// # Ok::<(), brandtone::models::PaletteError>(())
/// ```
pub fn generate_brand_colors(hex: &str) -> Result<BrandPalette, PaletteError> {
    let seed = Rgb::from_hex(hex).ok_or_else(|| PaletteError::InvalidColorInput(hex.to_string()))?;
    let hsl = seed.to_hsl();

    let colors = std::array::from_fn(|i| generate_shade(hsl, Shade::ALL[i]).to_rgb());

    Ok(BrandPalette::from_colors(colors))
}
