//! Brandtone Library
//!
//! This library derives a 9-step tonal palette (shades 100-900) from a
//! single seed color and reconciles it against a named collection of
//! design variables, creating or updating entries as needed.

// Module declarations
pub mod cli;
pub mod constants;
pub mod models;
pub mod services;
pub mod store;
