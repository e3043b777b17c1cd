//! Typed failures of the palette core.

use thiserror::Error;

/// Errors produced by palette generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The seed string did not match the 6-digit hex color pattern.
    #[error("invalid hex color '{0}': expected 6 hex digits with optional '#' prefix")]
    InvalidColorInput(String),
}
