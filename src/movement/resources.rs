//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal momentum model.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub base_max_speed: f32,
    pub boosted_max_speed: f32,
    /// Seconds of holding one direction before the boosted cap is reached
    pub time_to_max_boost: f32,
    pub acceleration: f32,
    pub ground_friction: f32,
    pub air_friction: f32,
    /// Fraction of acceleration lost while reversing against momentum (0..1)
    pub turn_resistance: f32,
    /// Fraction of acceleration available in the air (0..1)
    pub air_control: f32,
    /// Multiplier on friction applied while input is held
    pub light_friction_factor: f32,
    pub anti_stick_min_speed: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_max_speed: 5.0,
            boosted_max_speed: 6.0,
            time_to_max_boost: 1.5,
            acceleration: 40.0,
            ground_friction: 10.0,
            air_friction: 6.0,
            turn_resistance: 0.6,
            air_control: 0.7,
            light_friction_factor: 0.25,
            anti_stick_min_speed: 0.3,
            gravity: 9.81,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Upward velocity change applied at jump start
    pub jump_impulse: f32,
    /// Upward acceleration while the jump key is held
    pub jump_hold_force: f32,
    pub max_hold_time: f32,
    /// Seconds after a dash start during which jumps get a shorter hold
    pub dash_jump_window: f32,
    pub dash_hold_factor: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_impulse: 4.0,
            jump_hold_force: 7.0,
            max_hold_time: 0.75,
            dash_jump_window: 1.0,
            dash_hold_factor: 0.5,
        }
    }
}

impl JumpTuning {
    /// Apex height of a tap jump (no hold force): h = v² / (2g)
    pub fn tap_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_impulse * self.jump_impulse / (2.0 * gravity)
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashTuning {
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Fraction of the exit velocity kept as momentum once the dash ends
    pub carry_over: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            dash_speed: 10.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            carry_over: 0.5,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WallBounceTuning {
    pub min_bounce_speed: f32,
    pub wall_bounce_factor: f32,
    pub strong_hit_multiplier: f32,
    /// A hit is strong once horizontal speed exceeds this fraction of dash speed
    pub strong_dash_factor: f32,
    /// Seconds the speed clamp stays off after a bounce
    pub control_lock_time: f32,
    /// Minimum |normal.x| for a contact to count as a wall
    pub min_wall_normal_x: f32,
}

impl Default for WallBounceTuning {
    fn default() -> Self {
        Self {
            min_bounce_speed: 3.0,
            wall_bounce_factor: 0.05,
            strong_hit_multiplier: 1.1,
            strong_dash_factor: 0.8,
            control_lock_time: 0.12,
            min_wall_normal_x: 0.1,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorTuning {
    pub ground_ray_distance: f32,
    pub wall_ray_distance: f32,
    pub wall_ray_offset_y: f32,
    /// Gap between the collider edge and the wall ray origin
    pub wall_ray_skin: f32,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            ground_ray_distance: 0.2,
            wall_ray_distance: 0.1,
            wall_ray_offset_y: 0.05,
            wall_ray_skin: 0.01,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub dash: Vec<KeyCode>,
    pub interact: Vec<KeyCode>,
    pub wall_pass: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space],
            dash: vec![KeyCode::ShiftLeft],
            interact: vec![KeyCode::KeyE],
            wall_pass: vec![KeyCode::KeyQ],
        }
    }
}

/// Snapshot of one frame of player intent. Controllers only ever read it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveCommand {
    /// Horizontal axis in [-1, 1]
    pub move_axis: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub interact_pressed: bool,
    pub wall_pass_held: bool,
}

/// Latest sampled input. Edge flags accumulate across frames until the fixed
/// step consumes them, so presses are neither dropped nor seen twice.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
    pub interact_just_pressed: bool,
    pub wall_pass_held: bool,
}

impl MovementInput {
    pub fn command(&self) -> MoveCommand {
        MoveCommand {
            move_axis: self.axis.clamp(-1.0, 1.0),
            jump_pressed: self.jump_just_pressed,
            jump_held: self.jump_held,
            jump_released: self.jump_just_released,
            dash_pressed: self.dash_just_pressed,
            interact_pressed: self.interact_just_pressed,
            wall_pass_held: self.wall_pass_held,
        }
    }

    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.jump_just_released = false;
        self.dash_just_pressed = false;
        self.interact_just_pressed = false;
    }
}
