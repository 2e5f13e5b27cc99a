//! Progress domain: the persistence collaborator shared by gameplay services.

mod store;

#[cfg(test)]
mod tests;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, StoredValue};

use bevy::prelude::*;

pub const SAVE_PATH: &str = "save/progress.json";

/// Process-wide save store. Systems take it as `Option<ResMut<ProgressStore>>`
/// so a missing store means "don't persist" rather than a failure.
#[derive(Resource)]
pub struct ProgressStore(pub Box<dyn KeyValueStore>);

impl ProgressStore {
    pub fn in_memory() -> Self {
        Self(Box::new(MemoryStore::default()))
    }

    /// Flushes to disk, logging rather than propagating failures.
    pub fn save_or_warn(&mut self) {
        if let Err(e) = self.0.save() {
            warn!("{}", e);
        }
    }
}

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        let store = match JsonFileStore::open(SAVE_PATH) {
            Ok(store) => {
                info!("Opened save store at {}", store.path().display());
                ProgressStore(Box::new(store))
            }
            Err(e) => {
                error!("{}; progress will not persist this session", e);
                ProgressStore::in_memory()
            }
        };

        app.insert_resource(store);
    }
}
