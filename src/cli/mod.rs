//! CLI command handlers for Brandtone.
//!
//! This module provides headless, scriptable access to palette
//! generation and token store reconciliation for automation and CI use.

pub mod collections;
pub mod common;
pub mod generate;
pub mod sync;

// Re-export types used by main.rs and tests
pub use collections::CollectionsArgs;
pub use common::{CliError, CliResult, OutputFormat};
pub use generate::GenerateArgs;
pub use sync::SyncArgs;
