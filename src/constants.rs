//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and variable naming scheme.

/// The binary name of the application (used in command examples and help output).
pub const APP_BINARY_NAME: &str = "brandtone";

/// Namespace prefix for generated brand variables ("color/brand/<shade>").
pub const BRAND_VARIABLE_PREFIX: &str = "color/brand";
