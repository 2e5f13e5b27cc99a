//! Movement domain: horizontal momentum integration on the fixed step.

use bevy::prelude::*;

use crate::movement::{ControlOverride, Facing, MotionState, MovementTuning, Senses};

/// Axis magnitudes below this count as no input.
pub const AXIS_DEADZONE: f32 = 0.01;
/// Momentum magnitudes below this carry no direction.
const MOMENTUM_EPSILON: f32 = 0.01;
/// Smallest momentum that still resists a turn.
const TURN_EPSILON: f32 = 0.0001;

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Sign of an axis value with a deadzone: -1, 0 or 1.
pub fn axis_sign(value: f32, deadzone: f32) -> i8 {
    if value > deadzone {
        1
    } else if value < -deadzone {
        -1
    } else {
        0
    }
}

impl MotionState {
    /// Speed cap for this tick, blended from base to boosted by how long one
    /// direction has been held.
    pub fn max_speed_now(&self, tuning: &MovementTuning) -> f32 {
        let t = if tuning.time_to_max_boost > 0.0 {
            (self.same_dir_timer / tuning.time_to_max_boost).clamp(0.0, 1.0)
        } else {
            1.0
        };
        tuning.base_max_speed + (tuning.boosted_max_speed - tuning.base_max_speed) * t
    }

    /// Same-direction boost timer: grows while the input sign is stable, resets
    /// on a sign change, decays toward zero without input.
    pub fn update_direction_timer(&mut self, dt: f32, axis: f32) {
        let sign = axis_sign(axis, AXIS_DEADZONE);
        if sign != 0 {
            if sign == self.last_dir_sign {
                self.same_dir_timer += dt;
            } else {
                self.same_dir_timer = 0.0;
                self.last_dir_sign = sign;
            }
        } else {
            self.same_dir_timer = (self.same_dir_timer - dt).max(0.0);
        }
    }

    pub fn update_facing(&mut self, axis: f32) {
        match axis_sign(axis, AXIS_DEADZONE) {
            1 => self.facing = Facing::Right,
            -1 => self.facing = Facing::Left,
            _ => {}
        }
    }

    /// One fixed tick of horizontal movement. Returns the horizontal velocity
    /// to write into the body; vertical velocity is never touched here.
    pub fn integrate(
        &mut self,
        dt: f32,
        axis: f32,
        senses: &Senses,
        actual_vx: f32,
        control: ControlOverride,
        tuning: &MovementTuning,
    ) -> f32 {
        self.grounded = senses.grounded;

        if let ControlOverride::Dash { velocity_x } | ControlOverride::Carry { velocity_x } =
            control
        {
            self.momentum.x = velocity_x;
            return velocity_x;
        }

        self.update_direction_timer(dt, axis);
        let input_sign = axis_sign(axis, AXIS_DEADZONE);

        // Wall ahead: never keep pushing into it, and let go when turning away slowly
        let move_sign = if self.momentum.x.abs() > MOMENTUM_EPSILON {
            self.momentum.x.signum() as i8
        } else {
            input_sign
        };
        if move_sign != 0 && senses.wall_ahead(move_sign) {
            if self.momentum.x * move_sign as f32 > 0.0 {
                self.momentum.x = 0.0;
            }
            if actual_vx.abs() < tuning.anti_stick_min_speed && input_sign == -move_sign {
                self.momentum.x = 0.0;
            }
        }

        let max_speed_now = self.max_speed_now(tuning);
        let (accel, friction) = if senses.grounded {
            (tuning.acceleration, tuning.ground_friction)
        } else {
            (
                tuning.acceleration * tuning.air_control,
                tuning.air_friction,
            )
        };

        let mut desired_accel = axis * accel;
        if input_sign != 0
            && self.momentum.x.abs() > TURN_EPSILON
            && input_sign as f32 != self.momentum.x.signum()
        {
            desired_accel *= 1.0 - tuning.turn_resistance;
        }

        self.momentum.x += desired_accel * dt;

        if input_sign == 0 {
            self.momentum.x = move_towards(self.momentum.x, 0.0, friction * dt);
        } else {
            let light = tuning.light_friction_factor * friction * dt;
            self.momentum.x = move_towards(self.momentum.x, 0.0, light);
        }

        if !control.is_active() {
            self.momentum.x = self.momentum.x.clamp(-max_speed_now, max_speed_now);
        }

        self.momentum.x
    }

    /// Single entry point for other controllers to overwrite horizontal velocity.
    pub fn set_horizontal_velocity(&mut self, velocity: &mut Vec2, vx: f32) {
        self.momentum.x = vx;
        velocity.x = vx;
    }

    /// Vertical velocity belongs to gravity and the jump controller; momentum is untouched.
    pub fn set_vertical_velocity(&self, velocity: &mut Vec2, vy: f32) {
        velocity.y = vy;
    }

    /// Back to spawn state, keeping facing.
    pub fn reset(&mut self) {
        let facing = self.facing;
        *self = MotionState {
            facing,
            ..default()
        };
    }
}
