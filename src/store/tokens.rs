//! Serde-backed token store usable in memory or from a JSON file.
//!
//! This is the CLI's stand-in for a design tool's variable store. The
//! on-disk layout is an implementation detail of this tool and carries
//! no compatibility promise.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::models::Rgb;
use crate::store::{CollectionInfo, VariableKind, VariableStore};

/// One mode of a collection (for example "Light" or "Dark").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    /// Store-assigned mode id.
    pub id: String,
    /// Human-readable mode name.
    pub name: String,
}

/// A named, typed design variable with one value per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Store-assigned variable id.
    pub id: String,
    /// Variable name, slash-namespaced (for example "color/brand/500").
    pub name: String,
    /// Id of the owning collection.
    pub collection_id: String,
    /// Value type of the variable.
    pub kind: VariableKind,
    /// Values keyed by mode id.
    pub values: BTreeMap<String, Rgb>,
}

/// A collection of variables with at least one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Store-assigned collection id.
    pub id: String,
    /// Human-readable collection name.
    pub name: String,
    /// Modes of the collection; never empty.
    pub modes: Vec<Mode>,
}

/// In-memory variable store with optional JSON file persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenStore {
    /// All collections in the store.
    collections: Vec<Collection>,
    /// All variables across collections.
    variables: Vec<Variable>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON file.
    ///
    /// A missing file yields an empty store so first runs need no setup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read token store from {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse token store at {}", path.display()))
    }

    /// Saves the store to a JSON file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("Failed to serialize token store")?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write token store to {}", path.display()))
    }

    /// Looks up a variable by id.
    #[must_use]
    pub fn variable(&self, variable_id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == variable_id)
    }

    /// Number of variables across all collections.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn collection(&self, collection_id: &str) -> Result<&Collection> {
        match self.collections.iter().find(|c| c.id == collection_id) {
            Some(collection) => Ok(collection),
            None => bail!("Collection '{collection_id}' not found"),
        }
    }
}

impl VariableStore for TokenStore {
    fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        Ok(self
            .collections
            .iter()
            .map(|c| CollectionInfo {
                id: c.id.clone(),
                name: c.name.clone(),
                mode_count: c.modes.len(),
            })
            .collect())
    }

    fn create_collection(&mut self, name: &str) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.collections.push(Collection {
            id: id.clone(),
            name: name.to_string(),
            modes: vec![Mode {
                id: Uuid::new_v4().to_string(),
                name: "Mode 1".to_string(),
            }],
        });
        tracing::debug!(collection = name, id = %id, "created collection");
        Ok(id)
    }

    fn first_mode(&self, collection_id: &str) -> Result<String> {
        let collection = self.collection(collection_id)?;
        match collection.modes.first() {
            Some(mode) => Ok(mode.id.clone()),
            None => bail!("Collection '{}' has no modes", collection.name),
        }
    }

    fn find_variable(&self, name: &str, collection_id: &str) -> Result<Option<String>> {
        Ok(self
            .variables
            .iter()
            .find(|v| v.name == name && v.collection_id == collection_id)
            .map(|v| v.id.clone()))
    }

    fn create_variable(
        &mut self,
        name: &str,
        collection_id: &str,
        kind: VariableKind,
    ) -> Result<String> {
        // Creating into a missing collection is a caller bug; fail loudly.
        self.collection(collection_id)?;

        let id = Uuid::new_v4().to_string();
        self.variables.push(Variable {
            id: id.clone(),
            name: name.to_string(),
            collection_id: collection_id.to_string(),
            kind,
            values: BTreeMap::new(),
        });
        tracing::debug!(variable = name, id = %id, "created variable");
        Ok(id)
    }

    fn set_variable_value(&mut self, variable_id: &str, mode_id: &str, value: Rgb) -> Result<()> {
        let variable = match self.variables.iter_mut().find(|v| v.id == variable_id) {
            Some(variable) => variable,
            None => bail!("Variable '{variable_id}' not found"),
        };
        variable.values.insert(mode_id.to_string(), value);
        Ok(())
    }
}
