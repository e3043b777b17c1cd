//! Service layer for palette generation and store reconciliation.
//!
//! This module contains the pure palette pipeline (shade interpolation
//! and generation) and the reconciler that applies a palette to a
//! variable store.

pub mod generator;
pub mod reconciler;
pub mod shades;

// Re-export commonly used types and functions
pub use generator::generate_brand_colors;
pub use reconciler::{reconcile_palette, CollectionTarget, ReconcileReport, VariableOutcome};
pub use shades::generate_shade;
