//! Movement domain: character controller plugin wiring and public exports.

mod bootstrap;
pub(crate) mod bounce;
mod components;
pub(crate) mod dash;
mod events;
pub(crate) mod integrator;
pub(crate) mod jump;
mod resources;
mod systems;


pub use bootstrap::spawn_player;
pub use components::{
    ControlOverride, ControlsFrozen, DashPhase, DashState, Facing, GameLayer, Ground, JumpState,
    MotionState, Player, PreCollisionVelocity, Senses, Wall,
};
pub use events::{DashEndedEvent, DashReadyEvent, DashStartedEvent, JumpedEvent, WallBounceEvent};
pub use resources::{
    DashTuning, InputBindings, JumpTuning, MoveCommand, MovementInput, MovementTuning,
    SensorTuning, WallBounceTuning,
};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::systems::{
    apply_dash, apply_horizontal_movement, apply_jump, apply_jump_hold, apply_wall_bounce,
    clear_input_edges, detect_ground_and_walls, read_input, record_pre_collision_velocity,
    tick_control_override, update_ground_contact,
};

/// Fixed-step ordering for everything that reads the player's command.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Collision reactions and ray-cast sensing
    Sense,
    /// Jump, dash and momentum controllers
    Control,
    /// Pre-step bookkeeping and input edge reset
    Finalize,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<JumpTuning>()
            .init_resource::<DashTuning>()
            .init_resource::<WallBounceTuning>()
            .init_resource::<SensorTuning>()
            .init_resource::<InputBindings>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<DashStartedEvent>()
            .add_message::<DashEndedEvent>()
            .add_message::<DashReadyEvent>()
            .add_message::<WallBounceEvent>()
            .add_systems(
                Update,
                (
                    read_input,
                    sync_gravity.run_if(resource_changed::<MovementTuning>),
                ),
            )
            .configure_sets(
                FixedUpdate,
                (MovementSet::Sense, MovementSet::Control, MovementSet::Finalize)
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                (apply_wall_bounce, detect_ground_and_walls)
                    .chain()
                    .in_set(MovementSet::Sense),
            )
            .add_systems(
                FixedUpdate,
                (
                    update_ground_contact,
                    apply_jump,
                    apply_dash,
                    apply_horizontal_movement,
                    apply_jump_hold,
                    tick_control_override,
                )
                    .chain()
                    .in_set(MovementSet::Control),
            )
            .add_systems(
                FixedUpdate,
                (record_pre_collision_velocity, clear_input_edges)
                    .chain()
                    .in_set(MovementSet::Finalize),
            );
    }
}

/// Keeps the physics world's gravity in step with the tuning value.
fn sync_gravity(tuning: Res<MovementTuning>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
}
