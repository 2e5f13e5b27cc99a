//! Progress domain: tests for the key-value stores.

use std::fs;
use std::path::PathBuf;

use super::{JsonFileStore, KeyValueStore, MemoryStore};

fn temp_save_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("turbo_trip_store_{}_{}", std::process::id(), name))
        .join("progress.json")
}

#[test]
fn test_memory_store_defaults_for_missing_keys() {
    let store = MemoryStore::default();
    assert!(!store.has_key("UnlockedAbilities"));
    assert_eq!(store.get_string("UnlockedAbilities", "none"), "none");
    assert_eq!(store.get_int("CurrentWorldNumber", 1), 1);
    assert_eq!(store.get_float("BestTime", 0.0), 0.0);
}

#[test]
fn test_memory_store_typed_round_trip() {
    let mut store = MemoryStore::default();
    store.set_string("name", "nick");
    store.set_int("world", 3);
    store.set_float("time", 12.5);

    assert_eq!(store.get_string("name", ""), "nick");
    assert_eq!(store.get_int("world", 0), 3);
    assert_eq!(store.get_float("time", 0.0), 12.5);
}

#[test]
fn test_type_mismatch_falls_back_to_default() {
    let mut store = MemoryStore::default();
    store.set_string("world", "three");
    assert_eq!(store.get_int("world", 1), 1);

    // Integers widen to floats
    store.set_int("time", 4);
    assert_eq!(store.get_float("time", 0.0), 4.0);
}

#[test]
fn test_delete_all_clears_every_key() {
    let mut store = MemoryStore::default();
    store.set_int("a", 1);
    store.set_int("b", 2);
    store.delete_all();
    assert!(!store.has_key("a"));
    assert!(!store.has_key("b"));
}

#[test]
fn test_json_store_survives_reopen() {
    let path = temp_save_path("reopen");
    let _ = fs::remove_dir_all(path.parent().unwrap());

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(!store.has_key("UnlockedAbilities"));
    store.set_string("UnlockedAbilities", "DoubleJump,Dash");
    store.set_int("CurrentWorldNumber", 3);
    store.set_float("BestTime_level_1", 42.25);
    store.save().unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get_string("UnlockedAbilities", ""),
        "DoubleJump,Dash"
    );
    assert_eq!(reopened.get_int("CurrentWorldNumber", 1), 3);
    assert_eq!(reopened.get_float("BestTime_level_1", 0.0), 42.25);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let path = temp_save_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(err.to_string().contains("Parse error"));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
