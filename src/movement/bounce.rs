//! Movement domain: wall bounce reaction to high-speed impacts.

use bevy::prelude::*;

use crate::movement::dash::ControlledBody;
use crate::movement::{ControlOverride, DashState, DashTuning, WallBounceTuning};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBounce {
    pub velocity_x: f32,
    /// Fast enough to count as a hard hit (amplified, plays the impact cue)
    pub strong: bool,
}

/// Picks the contact normal with the largest horizontal component.
pub fn most_wall_like_normal(normals: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    normals
        .into_iter()
        .max_by(|a, b| a.x.abs().total_cmp(&b.x.abs()))
}

/// Reflected horizontal velocity for an impact, or `None` when the contact is
/// floor-like or too slow to bounce.
pub fn compute_wall_bounce(
    pre_collision_velocity: Vec2,
    normals: impl IntoIterator<Item = Vec2>,
    dash_speed: f32,
    tuning: &WallBounceTuning,
) -> Option<WallBounce> {
    let normal = most_wall_like_normal(normals)?;
    if normal.x.abs() < tuning.min_wall_normal_x {
        return None;
    }

    let horizontal_speed = pre_collision_velocity.x.abs();
    if horizontal_speed < tuning.min_bounce_speed {
        return None;
    }

    let strong = horizontal_speed > dash_speed * tuning.strong_dash_factor;
    let mut velocity_x = -pre_collision_velocity.x * tuning.wall_bounce_factor;
    if strong {
        velocity_x *= tuning.strong_hit_multiplier;
    }

    Some(WallBounce { velocity_x, strong })
}

/// The bounce replaces the dash as the horizontal governor. The dash ends
/// without carry-over and the speed clamp stays lifted for `control_lock_time`.
pub fn apply_bounce(
    bounce: WallBounce,
    dash: &mut DashState,
    body: &mut ControlledBody,
    dash_tuning: &DashTuning,
    tuning: &WallBounceTuning,
) {
    if dash.end_early(dash_tuning) {
        *body.gravity_scale = dash.saved_gravity_scale;
    }
    body.motion
        .set_horizontal_velocity(body.velocity, bounce.velocity_x);
    *body.control = ControlOverride::Bounce {
        remaining: tuning.control_lock_time,
    };
}
