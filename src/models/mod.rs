//! Data models for colors, shades, and generated palettes.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of the store and
//! CLI layers.

pub mod error;
pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod shade;

// Re-export all model types
pub use error::PaletteError;
pub use hsl::Hsl;
pub use palette::{BrandPalette, PaletteEntry};
pub use rgb::Rgb;
pub use shade::Shade;
