//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (kill zones, checkpoints, shrines) - never block or ground
    Sensor,
}

/// Capability tag for the controllable character. Triggers check for this
/// component rather than names or tags.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Sensor readings refreshed every fixed step.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Senses {
    pub grounded: bool,
    pub was_grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Senses {
    pub fn wall_ahead(&self, dir_sign: i8) -> bool {
        match dir_sign.signum() {
            1 => self.wall_right,
            -1 => self.wall_left,
            _ => false,
        }
    }

    pub fn just_landed(&self) -> bool {
        self.grounded && !self.was_grounded
    }
}

/// Horizontal momentum owned by the integrator. Other controllers go through
/// `set_horizontal_velocity` / `set_vertical_velocity`.
#[derive(Component, Debug, Default, Clone)]
pub struct MotionState {
    pub momentum: Vec2,
    pub same_dir_timer: f32,
    pub last_dir_sign: i8,
    pub grounded: bool,
    pub facing: Facing,
}

/// Which governor owns horizontal velocity this tick. Only one at a time.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub enum ControlOverride {
    #[default]
    None,
    /// Velocity pinned to the dash velocity
    Dash { velocity_x: f32 },
    /// Dash carry-over held for the tick the dash ends
    Carry { velocity_x: f32 },
    /// Speed clamp lifted for the remaining seconds after a wall bounce
    Bounce { remaining: f32 },
}

impl ControlOverride {
    pub fn is_active(&self) -> bool {
        !matches!(self, ControlOverride::None)
    }

    /// Counts down a bounce window and drops a carry pin after its one tick.
    /// Returns true on the tick a bounce window expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self {
            ControlOverride::Bounce { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    *self = ControlOverride::None;
                    return true;
                }
                false
            }
            ControlOverride::Carry { .. } => {
                *self = ControlOverride::None;
                false
            }
            _ => false,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct JumpState {
    pub holding: bool,
    pub hold_timer: f32,
    pub current_max_hold_time: f32,
    pub can_double_jump: bool,
    /// Fixed-clock time of the last dash start
    pub last_dash_at: Option<f32>,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            holding: false,
            hold_timer: 0.0,
            current_max_hold_time: super::JumpTuning::default().max_hold_time,
            // Armed by the first grounded tick
            can_double_jump: false,
            last_dash_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing {
        remaining: f32,
        direction: f32,
    },
    Cooldown {
        remaining: f32,
    },
}

#[derive(Component, Debug, Clone)]
pub struct DashState {
    pub phase: DashPhase,
    /// Gravity scale to restore when the dash ends
    pub saved_gravity_scale: f32,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            phase: DashPhase::Ready,
            saved_gravity_scale: 1.0,
        }
    }
}

/// Velocity captured before the physics step, used to judge collision impacts.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PreCollisionVelocity(pub Vec2);

/// Suspends every controller (death wait, noclip).
#[derive(Component, Debug, Default)]
pub struct ControlsFrozen;
