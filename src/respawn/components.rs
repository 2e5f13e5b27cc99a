//! Respawn domain: hazard and checkpoint volumes, and the death wait.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::integrator::move_towards;

/// Distance at which a patrol counts as having reached its end point.
const PATROL_ARRIVE_EPSILON: f32 = 0.01;

/// Sensor volume (pit, spikes) that kills the player on contact
#[derive(Component, Debug)]
pub struct KillZone;

/// Sweeps a hazard left and right of where it was placed.
#[derive(Component, Debug, Clone, Copy)]
pub struct Patrol {
    pub start_x: f32,
    /// Distance travelled either side of `start_x`
    pub range: f32,
    pub speed: f32,
    pub target_x: f32,
}

impl Patrol {
    /// Heads right first.
    pub fn new(start_x: f32, range: f32, speed: f32) -> Self {
        Self {
            start_x,
            range,
            speed,
            target_x: start_x + range,
        }
    }

    /// Next x after `dt`, turning around once an end point is reached.
    pub fn step(&mut self, x: f32, dt: f32) -> f32 {
        let next_x = move_towards(x, self.target_x, self.speed * dt);
        if (next_x - self.target_x).abs() <= PATROL_ARRIVE_EPSILON {
            let right = self.start_x + self.range;
            self.target_x = if (self.target_x - right).abs() <= PATROL_ARRIVE_EPSILON {
                self.start_x - self.range
            } else {
                right
            };
        }
        next_x
    }
}

/// Sensor volume that moves the respawn point the first time it is touched
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub activated: bool,
}

/// Where the next respawn places the player
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct RespawnPoint(pub Vec2);

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RespawnTuning {
    /// Lift on respawn so the body doesn't start inside the floor or a hazard
    pub respawn_y_offset: f32,
}

impl Default for RespawnTuning {
    fn default() -> Self {
        Self {
            respawn_y_offset: 0.5,
        }
    }
}

impl RespawnTuning {
    pub fn respawn_position(&self, point: &RespawnPoint) -> Vec2 {
        point.0 + Vec2::new(0.0, self.respawn_y_offset)
    }
}

/// Death animation in progress; respawn waits for it to finish.
#[derive(Component, Debug, Clone, Copy)]
pub struct Dying {
    pub remaining: f32,
}

impl Dying {
    /// Returns true on the tick the wait resolves.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Colliders stay off for one physics step after a respawn.
#[derive(Component, Debug)]
pub struct RespawnGrace;
