//! Integration tests for the inventory store

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use inventory_store::{EventLevel, InventoryError, InventoryEvent, InventoryStore, MemorySink};

fn setup_test_store() -> (InventoryStore, MemorySink, TempDir) {
    let sink = MemorySink::new();
    let store = InventoryStore::with_sink(sink.clone());
    let dir = TempDir::new().unwrap();
    (store, sink, dir)
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("inventory.json")
}

#[test]
fn test_add_remove_get() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("apple", 10, None).unwrap();
    store.remove("apple", 3).unwrap();

    assert_eq!(store.get("apple").unwrap(), 7);
}

#[test]
fn test_add_bringing_total_to_zero_removes_item() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("apple", 5, None).unwrap();
    store.add("apple", -7, None).unwrap();

    assert_eq!(store.get("apple").unwrap(), 0);
    assert!(!store.contains("apple"));
}

#[test]
fn test_remove_all_deletes_item() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("apple", 5, None).unwrap();
    store.remove("apple", 5).unwrap();

    assert!(store.is_empty());
    assert!(matches!(
        store.remove("apple", 1),
        Err(InventoryError::NotFound(_))
    ));
}

#[test]
fn test_low_stock() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("apple", 10, None).unwrap();
    store.add("banana", 2, None).unwrap();

    assert_eq!(store.low_stock(5).unwrap(), vec!["banana".to_string()]);
}

#[test]
fn test_save_then_load_round_trip() {
    let (mut store, _, dir) = setup_test_store();
    let path = data_file(&dir);

    store.add("apple", 7, None).unwrap();
    store.add("banana", 2, None).unwrap();
    store.add("cherry", 120, None).unwrap();
    let before = store.snapshot();

    store.try_save(&path).unwrap();

    let mut reloaded = InventoryStore::with_sink(MemorySink::new());
    let summary = reloaded.try_load(&path).unwrap();

    assert_eq!(summary.loaded, 3);
    assert_eq!(reloaded.snapshot(), before);
}

#[test]
fn test_load_mixed_file_keeps_positive_integers_only() {
    let (mut store, sink, dir) = setup_test_store();
    let path = data_file(&dir);
    fs::write(
        &path,
        r#"{"apple": 10, "banana": -1, "cherry": "x", "durian": 0, "egg": "6"}"#,
    )
    .unwrap();

    store.load(&path);

    let items: Vec<(String, i64)> = store
        .items()
        .map(|(name, qty)| (name.to_string(), qty))
        .collect();
    assert_eq!(
        items,
        vec![("apple".to_string(), 10), ("egg".to_string(), 6)]
    );

    let warnings = sink.at_level(EventLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        InventoryEvent::EntrySkipped { key, .. } if key == "cherry"
    ));
}

#[test]
fn test_load_missing_file_gives_empty_inventory() {
    let (mut store, sink, dir) = setup_test_store();

    store.load(data_file(&dir));

    assert!(store.is_empty());
    assert_eq!(sink.at_level(EventLevel::Warn).len(), 1);
    assert!(sink.at_level(EventLevel::Error).is_empty());
}

#[test]
fn test_load_corrupt_file_gives_empty_inventory() {
    let (mut store, sink, dir) = setup_test_store();
    let path = data_file(&dir);
    fs::write(&path, "not json at all").unwrap();
    store.add("apple", 3, None).unwrap();

    store.load(&path);

    assert!(store.is_empty());
    assert!(matches!(
        sink.events().last(),
        Some(InventoryEvent::LoadFailed { .. })
    ));
}

#[test]
fn test_save_overwrites_previous_file() {
    let (mut store, _, dir) = setup_test_store();
    let path = data_file(&dir);
    fs::write(&path, r#"{"old": 1}"#).unwrap();

    store.add("new", 4, None).unwrap();
    store.save(&path);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"new": 4}));
}

#[test]
fn test_save_failure_does_not_surface_to_caller() {
    let (mut store, sink, dir) = setup_test_store();
    let path = dir.path().join("blocked");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("inside"), "x").unwrap();

    store.add("apple", 1, None).unwrap();
    // save() has no return value; the only trace of the failure is the sink
    store.save(&path);

    let errors = sink.at_level(EventLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], InventoryEvent::SaveFailed { .. }));
}

#[test]
fn test_save_creates_missing_parent_directories() {
    let (mut store, _, dir) = setup_test_store();
    let path = dir.path().join("nested").join("deeper").join("inventory.json");

    store.add("apple", 2, None).unwrap();
    store.try_save(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_report_lists_items_by_name() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("banana", 2, None).unwrap();
    store.add("apple", 7, None).unwrap();

    assert_eq!(
        store.report().to_string(),
        "Items Report\napple -> 7\nbanana -> 2\n"
    );
}

#[test]
fn test_mutation_log_collects_timestamped_lines() {
    let (mut store, _, _dir) = setup_test_store();
    let mut log = Vec::new();

    store.add("apple", 10, Some(&mut log)).unwrap();
    store.add("banana", 2, Some(&mut log)).unwrap();
    store.remove("apple", 3).unwrap();

    assert_eq!(log.len(), 2);
    let (stamp, message) = log[1].split_once(": ").unwrap();
    assert!(stamp.contains('T'));
    assert_eq!(message, "Added 2 of banana");
}

#[test]
fn test_clear_empties_store() {
    let (mut store, _, _dir) = setup_test_store();

    store.add("apple", 3, None).unwrap();
    store.add("banana", 1, None).unwrap();
    assert_eq!(store.len(), 2);

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.get("apple").unwrap(), 0);
}
