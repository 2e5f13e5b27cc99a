//! Movement domain: variable-height jump and double-jump gating.

use bevy::prelude::*;

use crate::movement::{JumpState, JumpTuning, MotionState, MoveCommand, Senses};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

impl JumpState {
    /// Refreshes the double-jump charge while grounded and drops any hold on landing.
    pub fn on_ground_contact(&mut self, senses: &Senses) {
        if senses.grounded {
            self.can_double_jump = true;
        }
        if senses.just_landed() {
            self.holding = false;
            self.hold_timer = 0.0;
        }
    }

    pub fn notify_dash_started(&mut self, now: f32) {
        self.last_dash_at = Some(now);
    }

    pub fn recently_dashed(&self, now: f32, tuning: &JumpTuning) -> bool {
        self.last_dash_at
            .is_some_and(|dashed_at| now - dashed_at <= tuning.dash_jump_window)
    }

    /// Starts a ground or double jump if the command asks for one and it is
    /// allowed. The caller applies the impulse.
    pub fn try_jump(
        &mut self,
        command: &MoveCommand,
        grounded: bool,
        double_jump_unlocked: bool,
        now: f32,
        tuning: &JumpTuning,
    ) -> Option<JumpKind> {
        if !command.jump_pressed {
            return None;
        }

        let kind = if grounded {
            JumpKind::Ground
        } else if self.can_double_jump && double_jump_unlocked {
            self.can_double_jump = false;
            JumpKind::Double
        } else {
            return None;
        };

        // Dash-then-jump gets a shorter hold so the two can't stack into a huge jump
        self.current_max_hold_time = if self.recently_dashed(now, tuning) {
            tuning.max_hold_time * tuning.dash_hold_factor
        } else {
            tuning.max_hold_time
        };
        self.hold_timer = 0.0;
        self.holding = true;

        Some(kind)
    }

    /// Upward velocity to add this fixed tick while the jump is held.
    pub fn tick_hold(&mut self, dt: f32, command: &MoveCommand, tuning: &JumpTuning) -> f32 {
        if !self.holding {
            return 0.0;
        }
        if command.jump_released
            || !command.jump_held
            || self.hold_timer >= self.current_max_hold_time
        {
            self.holding = false;
            return 0.0;
        }

        self.hold_timer += dt;
        if self.hold_timer >= self.current_max_hold_time {
            self.holding = false;
        }
        tuning.jump_hold_force * dt
    }

    pub fn reset(&mut self) {
        *self = JumpState::default();
    }
}

/// Jump impulse as a velocity change from rest, so fall speed never eats it.
pub fn launch(motion: &mut MotionState, velocity: &mut Vec2, tuning: &JumpTuning) {
    motion.set_vertical_velocity(velocity, tuning.jump_impulse);
    let vx = velocity.x;
    motion.set_horizontal_velocity(velocity, vx);
}
