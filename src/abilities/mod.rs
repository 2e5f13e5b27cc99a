//! Abilities domain: unlockable moves (double jump, dash, wall pass).

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use components::{AbilityShrine, PassableWall, WallPassZone};
pub use events::{
    AbilityUnlockedEvent, ResetAbilitiesRequest, SelectWorldRequest, UnlockAbilityRequest,
};
pub use types::{Abilities, Ability, CURRENT_WORLD_KEY, UNLOCKED_ABILITIES_KEY};

use bevy::prelude::*;

use crate::abilities::systems::{
    handle_reset_requests, handle_select_world, handle_unlock_requests, interact_with_shrines,
    load_abilities, persist_abilities, update_wall_pass,
};
use crate::movement::MovementSet;

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Abilities>()
            .add_message::<UnlockAbilityRequest>()
            .add_message::<AbilityUnlockedEvent>()
            .add_message::<SelectWorldRequest>()
            .add_message::<ResetAbilitiesRequest>()
            .add_systems(Startup, load_abilities)
            .add_systems(
                FixedUpdate,
                (interact_with_shrines, update_wall_pass).in_set(MovementSet::Control),
            )
            .add_systems(
                Update,
                (
                    handle_reset_requests,
                    handle_select_world,
                    handle_unlock_requests,
                    persist_abilities.run_if(resource_changed::<Abilities>),
                )
                    .chain(),
            );
    }
}
