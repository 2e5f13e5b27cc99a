//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, PlayerTuningFile, load_player_tuning, parse_player_tuning};

use bevy::prelude::*;
use std::path::Path;

pub const PLAYER_TUNING_PATH: &str = "assets/data/player_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_player_tuning);
    }
}

/// Missing or malformed tuning keeps the built-in defaults.
fn apply_player_tuning(mut commands: Commands) {
    let tuning = match load_player_tuning(Path::new(PLAYER_TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded player tuning from {}", PLAYER_TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            PlayerTuningFile::default()
        }
    };

    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.jump);
    commands.insert_resource(tuning.dash);
    commands.insert_resource(tuning.wall_bounce);
    commands.insert_resource(tuning.sensor);
    commands.insert_resource(tuning.respawn);
    commands.insert_resource(tuning.sfx);
    commands.insert_resource(tuning.animation_clips);
    commands.insert_resource(tuning.animation);
}
