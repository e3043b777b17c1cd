//! Reconciliation of a generated palette against a variable store.
//!
//! Maps each shade to a `color/brand/<label>` variable in a target
//! collection, creating or updating as needed. Individual variable
//! failures are logged and skipped so one bad entry cannot abort the
//! remaining shades; the report carries whatever succeeded.

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::constants::BRAND_VARIABLE_PREFIX;
use crate::models::BrandPalette;
use crate::store::{VariableKind, VariableStore};

/// Where the reconciled variables should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionTarget {
    /// Use an existing collection by id.
    Existing(String),
    /// Create a new collection with this name.
    New(String),
}

/// One created or updated variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableOutcome {
    /// Full variable name (for example "color/brand/500").
    pub name: String,
    /// Shade label the variable represents.
    pub shade: u16,
    /// Resulting color as an uppercase hex string.
    pub color: String,
}

/// Result of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Id of the collection that received the variables.
    pub collection_id: String,
    /// Name of the collection, when it was created by this run.
    pub collection_name: Option<String>,
    /// Variables created by this run.
    pub created: Vec<VariableOutcome>,
    /// Variables that already existed and were updated.
    pub updated: Vec<VariableOutcome>,
}

/// Writes a palette into a variable store collection.
///
/// Resolves the target collection (verifying an existing id, or creating
/// a new collection), then walks the 9 shades in ascending order. Values
/// are written for the collection's first mode. A failing create or
/// update is logged and skipped; a missing target collection aborts the
/// whole run.
pub fn reconcile_palette<S: VariableStore>(
    store: &mut S,
    palette: &BrandPalette,
    target: &CollectionTarget,
) -> Result<ReconcileReport> {
    let (collection_id, collection_name) = match target {
        CollectionTarget::Existing(id) => {
            let known = store.list_collections()?;
            if !known.iter().any(|c| &c.id == id) {
                bail!("Target collection '{id}' not found");
            }
            (id.clone(), None)
        }
        CollectionTarget::New(name) => {
            let id = store.create_collection(name)?;
            info!(collection = name.as_str(), "created target collection");
            (id, Some(name.clone()))
        }
    };

    let mode_id = store.first_mode(&collection_id)?;

    let mut created = Vec::new();
    let mut updated = Vec::new();

    for entry in palette {
        let name = format!("{BRAND_VARIABLE_PREFIX}/{}", entry.shade.label());
        let outcome = VariableOutcome {
            name: name.clone(),
            shade: entry.shade.label(),
            color: entry.color.to_hex(),
        };

        match store.find_variable(&name, &collection_id)? {
            Some(variable_id) => {
                if let Err(err) = store.set_variable_value(&variable_id, &mode_id, entry.color) {
                    error!(variable = name.as_str(), %err, "failed to update variable");
                    continue;
                }
                updated.push(outcome);
            }
            None => {
                let result = store
                    .create_variable(&name, &collection_id, VariableKind::Color)
                    .and_then(|variable_id| {
                        store.set_variable_value(&variable_id, &mode_id, entry.color)
                    });
                if let Err(err) = result {
                    error!(variable = name.as_str(), %err, "failed to create variable");
                    continue;
                }
                created.push(outcome);
            }
        }
    }

    info!(
        created = created.len(),
        updated = updated.len(),
        "palette reconciliation complete"
    );

    Ok(ReconcileReport {
        collection_id,
        collection_name,
        created,
        updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use crate::services::generate_brand_colors;
    use crate::store::{CollectionInfo, TokenStore};

    #[test]
    fn test_new_collection_creates_all_nine() {
        let mut store = TokenStore::new();
        let palette = generate_brand_colors("#3366FF").unwrap();

        let report = reconcile_palette(
            &mut store,
            &palette,
            &CollectionTarget::New("Brand".to_string()),
        )
        .unwrap();

        assert_eq!(report.created.len(), 9);
        assert!(report.updated.is_empty());
        assert_eq!(report.collection_name.as_deref(), Some("Brand"));
        assert_eq!(store.variable_count(), 9);

        let shades: Vec<u16> = report.created.iter().map(|o| o.shade).collect();
        assert_eq!(shades, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert_eq!(report.created[4].name, "color/brand/500");
        assert_eq!(report.created[4].color, "#3366FF");
    }

    #[test]
    fn test_second_run_updates_instead_of_creating() {
        let mut store = TokenStore::new();
        let palette = generate_brand_colors("#3366FF").unwrap();

        let first = reconcile_palette(
            &mut store,
            &palette,
            &CollectionTarget::New("Brand".to_string()),
        )
        .unwrap();

        let replacement = generate_brand_colors("#C86432").unwrap();
        let second = reconcile_palette(
            &mut store,
            &replacement,
            &CollectionTarget::Existing(first.collection_id.clone()),
        )
        .unwrap();

        assert!(second.created.is_empty());
        assert_eq!(second.updated.len(), 9);
        assert_eq!(second.collection_id, first.collection_id);
        assert_eq!(second.collection_name, None);
        // No duplicates accumulated
        assert_eq!(store.variable_count(), 9);
    }

    #[test]
    fn test_missing_existing_collection_aborts() {
        let mut store = TokenStore::new();
        let palette = generate_brand_colors("#3366FF").unwrap();

        let result = reconcile_palette(
            &mut store,
            &palette,
            &CollectionTarget::Existing("missing-id".to_string()),
        );
        assert!(result.is_err());
        assert_eq!(store.variable_count(), 0);
    }

    /// Store that fails every write for one shade's variable name.
    struct FlakyStore {
        inner: TokenStore,
        poisoned: String,
    }

    impl VariableStore for FlakyStore {
        fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
            self.inner.list_collections()
        }

        fn create_collection(&mut self, name: &str) -> Result<String> {
            self.inner.create_collection(name)
        }

        fn first_mode(&self, collection_id: &str) -> Result<String> {
            self.inner.first_mode(collection_id)
        }

        fn find_variable(&self, name: &str, collection_id: &str) -> Result<Option<String>> {
            self.inner.find_variable(name, collection_id)
        }

        fn create_variable(
            &mut self,
            name: &str,
            collection_id: &str,
            kind: VariableKind,
        ) -> Result<String> {
            if name == self.poisoned {
                bail!("store rejected '{name}'");
            }
            self.inner.create_variable(name, collection_id, kind)
        }

        fn set_variable_value(&mut self, variable_id: &str, mode_id: &str, value: Rgb) -> Result<()> {
            self.inner.set_variable_value(variable_id, mode_id, value)
        }
    }

    #[test]
    fn test_per_variable_failure_does_not_abort_run() {
        let mut store = FlakyStore {
            inner: TokenStore::new(),
            poisoned: "color/brand/400".to_string(),
        };
        let palette = generate_brand_colors("#3366FF").unwrap();

        let report = reconcile_palette(
            &mut store,
            &palette,
            &CollectionTarget::New("Brand".to_string()),
        )
        .unwrap();

        assert_eq!(report.created.len(), 8);
        assert!(report.created.iter().all(|o| o.shade != 400));
        // Shades after the failure were still processed
        assert!(report.created.iter().any(|o| o.shade == 900));
    }
}
