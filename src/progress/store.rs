//! Progress domain: durable key-value storage behind a narrow trait.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for save-file failures.
#[derive(Debug)]
pub struct StoreError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Save store {}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Strings, integers and floats under string keys, durable once `save` succeeds.
/// Getters fall back to the given default on a missing key or a type mismatch.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<&StoredValue>;
    fn set(&mut self, key: &str, value: StoredValue);
    fn delete_all(&mut self);
    fn save(&mut self) -> Result<(), StoreError>;

    fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(StoredValue::Text(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(StoredValue::Int(value)) => *value,
            _ => default,
        }
    }

    fn get_float(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(StoredValue::Float(value)) => *value,
            Some(StoredValue::Int(value)) => *value as f64,
            _ => default,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, StoredValue::Text(value.to_string()));
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, StoredValue::Int(value));
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.set(key, StoredValue::Float(value));
    }
}

/// Volatile store for tests and for running without a writable save path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, StoredValue>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&StoredValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        self.values.insert(key.to_string(), value);
    }

    fn delete_all(&mut self) {
        self.values.clear();
    }

    fn save(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// JSON object on disk, read once on open and rewritten on `save`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, StoredValue>,
}

impl JsonFileStore {
    /// Opens the save file, starting empty when it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| StoreError {
                path: path.display().to_string(),
                message: format!("IO error: {}", e),
            })?;
            serde_json::from_str(&contents).map_err(|e| StoreError {
                path: path.display().to_string(),
                message: format!("Parse error: {}", e),
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&StoredValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        self.values.insert(key.to_string(), value);
    }

    fn delete_all(&mut self) {
        self.values.clear();
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let to_error = |message: String| StoreError {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| to_error(format!("IO error: {}", e)))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| to_error(format!("Serialize error: {}", e)))?;
        fs::write(&self.path, contents).map_err(|e| to_error(format!("IO error: {}", e)))
    }
}
