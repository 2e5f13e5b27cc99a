//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{
    apply_wall_bounce, detect_ground_and_walls, record_pre_collision_velocity,
};
pub(crate) use input::{clear_input_edges, read_input};
pub(crate) use movement::{
    apply_dash, apply_horizontal_movement, apply_jump, apply_jump_hold, tick_control_override,
    update_ground_contact,
};
