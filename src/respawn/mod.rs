//! Respawn domain: hazards, checkpoints, and the death-then-respawn sequence.

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    Checkpoint, Dying, KillZone, Patrol, RespawnGrace, RespawnPoint, RespawnTuning,
};
pub use events::{CheckpointReachedEvent, PlayerDiedEvent, PlayerRespawnedEvent};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::MovementSet;
use crate::respawn::systems::{
    activate_checkpoints, detect_kill_zones, end_respawn_grace, move_patrolling_hazards,
    tick_death_and_respawn,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnPoint>()
            .init_resource::<RespawnTuning>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_message::<CheckpointReachedEvent>()
            .add_systems(
                FixedUpdate,
                (
                    move_patrolling_hazards,
                    end_respawn_grace,
                    activate_checkpoints,
                    detect_kill_zones,
                    tick_death_and_respawn,
                )
                    .chain()
                    .run_if(gameplay_active)
                    .before(MovementSet::Sense),
            );
    }
}
