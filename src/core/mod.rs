//! Core domain: player-following camera, fixed-step clock, and pause handling.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, sync_virtual_time, toggle_pause_menu};

/// Physics and controller rate, matching the 0.02 s step the level design was tuned on.
pub const FIXED_STEP_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_STEP_HZ))
            .init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                ((toggle_pause_menu, sync_virtual_time).chain(), follow_player),
            );
    }
}
