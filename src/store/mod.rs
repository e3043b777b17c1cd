//! Variable store abstraction over the host design tool.
//!
//! The palette core never talks to a design tool directly; it goes
//! through the [`VariableStore`] capability trait so the reconciler can
//! be exercised against an in-memory store in tests and a file-backed
//! store from the CLI.

pub mod tokens;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Rgb;

pub use tokens::TokenStore;

/// Summary of a variable collection as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Store-assigned collection id.
    pub id: String,
    /// Human-readable collection name.
    pub name: String,
    /// Number of modes the collection carries.
    pub mode_count: usize,
}

/// The type of value a variable holds.
///
/// Only color variables exist today; the enum keeps the store honest
/// about what it is asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableKind {
    /// An RGB color value per mode.
    Color,
}

/// Externally-owned store of design variables.
///
/// Implementations own their data; the reconciler only observes per-call
/// success or failure and makes no transactional assumptions across calls.
pub trait VariableStore {
    /// Lists all collections with their id, name, and mode count.
    fn list_collections(&self) -> Result<Vec<CollectionInfo>>;

    /// Creates a new collection and returns its id.
    fn create_collection(&mut self, name: &str) -> Result<String>;

    /// Returns the id of the first mode of a collection.
    fn first_mode(&self, collection_id: &str) -> Result<String>;

    /// Finds a variable by name within a collection.
    fn find_variable(&self, name: &str, collection_id: &str) -> Result<Option<String>>;

    /// Creates a variable in a collection and returns its id.
    fn create_variable(
        &mut self,
        name: &str,
        collection_id: &str,
        kind: VariableKind,
    ) -> Result<String>;

    /// Sets a variable's color value for one mode.
    fn set_variable_value(&mut self, variable_id: &str, mode_id: &str, value: Rgb) -> Result<()>;
}
