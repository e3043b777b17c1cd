//! Integration tests for reconciling palettes into a token store file.

use brandtone::models::Shade;
use brandtone::services::{generate_brand_colors, reconcile_palette, CollectionTarget};
use brandtone::store::{TokenStore, VariableStore};
use tempfile::TempDir;

#[test]
fn test_sync_roundtrip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");

    // First run: new collection, 9 variables created.
    let palette = generate_brand_colors("#3366FF").unwrap();
    let mut store = TokenStore::load(&path).unwrap();
    let report = reconcile_palette(
        &mut store,
        &palette,
        &CollectionTarget::New("Brand".to_string()),
    )
    .unwrap();
    store.save(&path).unwrap();

    assert_eq!(report.created.len(), 9);
    assert_eq!(report.updated.len(), 0);

    // Second run against the persisted file: same names, all updates.
    let replacement = generate_brand_colors("#C86432").unwrap();
    let mut reloaded = TokenStore::load(&path).unwrap();
    let second = reconcile_palette(
        &mut reloaded,
        &replacement,
        &CollectionTarget::Existing(report.collection_id.clone()),
    )
    .unwrap();
    reloaded.save(&path).unwrap();

    assert_eq!(second.created.len(), 0);
    assert_eq!(second.updated.len(), 9);
    assert_eq!(reloaded.variable_count(), 9);
}

#[test]
fn test_variable_values_written_for_first_mode() {
    let mut store = TokenStore::new();
    let palette = generate_brand_colors("#3366FF").unwrap();
    let report = reconcile_palette(
        &mut store,
        &palette,
        &CollectionTarget::New("Brand".to_string()),
    )
    .unwrap();

    let mode = store.first_mode(&report.collection_id).unwrap();
    let id = store
        .find_variable("color/brand/500", &report.collection_id)
        .unwrap()
        .expect("midpoint variable must exist");
    let variable = store.variable(&id).unwrap();

    let value = variable.values.get(&mode).expect("value set for first mode");
    assert_eq!(value.to_hex(), "#3366FF");
    assert_eq!(*value, palette.color(Shade::MIDPOINT));
}

#[test]
fn test_missing_file_loads_as_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::load(&dir.path().join("absent.json")).unwrap();
    assert!(store.list_collections().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(TokenStore::load(&path).is_err());
}

#[test]
fn test_reports_collection_name_only_when_created() {
    let mut store = TokenStore::new();
    let palette = generate_brand_colors("#808080").unwrap();

    let first = reconcile_palette(
        &mut store,
        &palette,
        &CollectionTarget::New("Grays".to_string()),
    )
    .unwrap();
    assert_eq!(first.collection_name.as_deref(), Some("Grays"));

    let second = reconcile_palette(
        &mut store,
        &palette,
        &CollectionTarget::Existing(first.collection_id),
    )
    .unwrap();
    assert_eq!(second.collection_name, None);
}
