//! Movement domain: timed dash with cooldown.

use bevy::prelude::*;

use crate::movement::integrator::axis_sign;
use crate::movement::{
    ControlOverride, DashPhase, DashState, DashTuning, Facing, MotionState, MoveCommand,
};

/// Axis magnitude below which the dash follows facing instead of input.
const DASH_AXIS_DEADZONE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    None,
    /// Dash time ran out this tick; cooldown has begun
    Ended,
    /// Cooldown ran out this tick
    Ready,
}

impl DashState {
    pub fn can_dash(&self) -> bool {
        matches!(self.phase, DashPhase::Ready)
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    pub fn dash_direction(axis: f32, facing: Facing) -> f32 {
        match axis_sign(axis, DASH_AXIS_DEADZONE) {
            0 => facing.sign(),
            sign => sign as f32,
        }
    }

    /// Begins a dash if requested, unlocked and off cooldown. Returns the
    /// horizontal velocity the dash pins.
    pub fn try_start(
        &mut self,
        command: &MoveCommand,
        unlocked: bool,
        facing: Facing,
        tuning: &DashTuning,
    ) -> Option<f32> {
        if !command.dash_pressed || !unlocked || !self.can_dash() {
            return None;
        }

        let direction = Self::dash_direction(command.move_axis, facing);
        self.phase = DashPhase::Dashing {
            remaining: tuning.dash_duration,
            direction,
        };
        Some(direction * tuning.dash_speed)
    }

    pub fn tick(&mut self, dt: f32, tuning: &DashTuning) -> DashTransition {
        match self.phase {
            DashPhase::Ready => DashTransition::None,
            DashPhase::Dashing {
                remaining,
                direction,
            } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = DashPhase::Cooldown {
                        remaining: tuning.dash_cooldown,
                    };
                    DashTransition::Ended
                } else {
                    self.phase = DashPhase::Dashing {
                        remaining,
                        direction,
                    };
                    DashTransition::None
                }
            }
            DashPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = DashPhase::Ready;
                    DashTransition::Ready
                } else {
                    self.phase = DashPhase::Cooldown { remaining };
                    DashTransition::None
                }
            }
        }
    }

    /// Cuts an active dash short and starts the cooldown. Returns false when
    /// no dash was running.
    pub fn end_early(&mut self, tuning: &DashTuning) -> bool {
        if !self.is_dashing() {
            return false;
        }
        self.phase = DashPhase::Cooldown {
            remaining: tuning.dash_cooldown,
        };
        true
    }

    /// Back to Ready. Returns true when the dash was spent beforehand.
    pub fn reset(&mut self) -> bool {
        let was_spent = !self.can_dash();
        self.phase = DashPhase::Ready;
        was_spent
    }
}

/// Player state written by the dash and bounce transitions.
pub struct ControlledBody<'a> {
    pub control: &'a mut ControlOverride,
    pub motion: &'a mut MotionState,
    pub velocity: &'a mut Vec2,
    pub gravity_scale: &'a mut f32,
}

/// Momentum kept after a dash ends.
pub fn carry_over_velocity(exit_vx: f32, tuning: &DashTuning) -> f32 {
    exit_vx * tuning.carry_over
}

/// Starts a dash when requested. Gravity is suspended while the Dash
/// override pins horizontal velocity.
pub fn start_dash(
    dash: &mut DashState,
    body: &mut ControlledBody,
    command: &MoveCommand,
    unlocked: bool,
    tuning: &DashTuning,
) -> Option<f32> {
    let dash_vx = dash.try_start(command, unlocked, body.motion.facing, tuning)?;

    dash.saved_gravity_scale = *body.gravity_scale;
    *body.gravity_scale = 0.0;
    *body.control = ControlOverride::Dash {
        velocity_x: dash_vx,
    };
    body.motion.set_horizontal_velocity(body.velocity, dash_vx);
    body.motion.set_vertical_velocity(body.velocity, 0.0);
    Some(dash_vx)
}

/// Exit path shared by natural expiry and a jump cutting the dash short:
/// gravity comes back and the carry-over is pinned for the rest of this tick.
pub fn finish_dash(dash: &DashState, body: &mut ControlledBody, tuning: &DashTuning) {
    *body.gravity_scale = dash.saved_gravity_scale;
    let carry = carry_over_velocity(body.velocity.x, tuning);
    body.motion.set_horizontal_velocity(body.velocity, carry);
    *body.control = ControlOverride::Carry { velocity_x: carry };
}

/// Ends a running dash early through `finish_dash`. Returns false when no
/// dash was running.
pub fn cancel_dash(dash: &mut DashState, body: &mut ControlledBody, tuning: &DashTuning) -> bool {
    if !dash.end_early(tuning) {
        return false;
    }
    finish_dash(dash, body, tuning);
    true
}
