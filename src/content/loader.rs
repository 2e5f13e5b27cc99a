//! Loader for the RON tuning file at startup.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::feedback::{AnimationClips, AnimationConfig, SfxConfig};
use crate::movement::{DashTuning, JumpTuning, MovementTuning, SensorTuning, WallBounceTuning};
use crate::respawn::RespawnTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Every tunable the controllers and their collaborators read. Sections left
/// out of the file keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuningFile {
    pub movement: MovementTuning,
    pub jump: JumpTuning,
    pub dash: DashTuning,
    pub wall_bounce: WallBounceTuning,
    pub sensor: SensorTuning,
    pub respawn: RespawnTuning,
    pub sfx: SfxConfig,
    pub animation_clips: AnimationClips,
    pub animation: AnimationConfig,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_player_tuning(
    file_name: &str,
    contents: &str,
) -> Result<PlayerTuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_player_tuning(path: &Path) -> Result<PlayerTuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_player_tuning(&file_name, &contents)
}
