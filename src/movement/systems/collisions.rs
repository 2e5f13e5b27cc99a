//! Movement domain: ground and wall sensing, and wall-bounce impacts.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::bounce::{apply_bounce, compute_wall_bounce};
use crate::movement::dash::ControlledBody;
use crate::movement::{
    ControlOverride, DashEndedEvent, DashState, DashTuning, GameLayer, MotionState, Player,
    PreCollisionVelocity, SensorTuning, Senses, WallBounceEvent, WallBounceTuning,
};

/// Half extents of the player's box collider, with a fallback for other shapes.
fn half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(0.25, 0.5),
    }
}

pub(crate) fn detect_ground_and_walls(
    spatial_query: SpatialQuery,
    tuning: Res<SensorTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut Senses), With<Player>>,
) {
    // Obstacles only: sensors (kill zones, shrines) live on their own layer
    let obstacle_mask = [GameLayer::Ground, GameLayer::Wall];

    for (entity, transform, collider, mut senses) in &mut query {
        let filter = SpatialQueryFilter::from_mask(obstacle_mask).with_excluded_entities([entity]);
        let half = half_extents(collider);
        let origin = transform.translation.truncate();

        // Short ray straight down from the feet
        let feet = origin - Vec2::new(0.0, half.y);
        let ground_hit = spatial_query.cast_ray(
            feet,
            Dir2::NEG_Y,
            tuning.ground_ray_distance,
            true,
            &filter,
        );

        let cast_side = |dir_sign: f32, direction: Dir2| {
            let ray_origin = origin
                + Vec2::new(
                    dir_sign * (half.x + tuning.wall_ray_skin),
                    tuning.wall_ray_offset_y,
                );
            spatial_query
                .cast_ray(
                    ray_origin,
                    direction,
                    tuning.wall_ray_distance,
                    true,
                    &filter,
                )
                .is_some()
        };

        senses.was_grounded = senses.grounded;
        senses.grounded = ground_hit.is_some();
        senses.wall_left = cast_side(-1.0, Dir2::NEG_X);
        senses.wall_right = cast_side(1.0, Dir2::X);

        if senses.just_landed() {
            debug!("Landed: entity={:?}", entity);
        } else if senses.was_grounded && !senses.grounded {
            debug!("Left ground: entity={:?}", entity);
        }
    }
}

/// Remembers the velocity handed to the physics step so impacts can be judged
/// against the speed before the solver changed it.
pub(crate) fn record_pre_collision_velocity(
    mut query: Query<(&LinearVelocity, &mut PreCollisionVelocity), With<Player>>,
) {
    for (velocity, mut pre) in &mut query {
        pre.0 = velocity.0;
    }
}

pub(crate) fn apply_wall_bounce(
    mut collision_events: MessageReader<CollisionStart>,
    collisions: Collisions,
    tuning: Res<WallBounceTuning>,
    dash_tuning: Res<DashTuning>,
    mut bounce_events: MessageWriter<WallBounceEvent>,
    mut dash_ended_events: MessageWriter<DashEndedEvent>,
    mut query: Query<
        (
            &PreCollisionVelocity,
            &mut MotionState,
            &mut DashState,
            &mut ControlOverride,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other_entity) in pairs {
            let Ok((pre, mut motion, mut dash, mut control, mut velocity, mut gravity)) =
                query.get_mut(player_entity)
            else {
                continue;
            };

            // Only dashes bounce off walls
            if !dash.is_dashing() {
                continue;
            }

            let Some(contact_pair) = collisions.get(player_entity, other_entity) else {
                continue;
            };

            // Manifold normals point from collider1 to collider2; flip them so
            // they point from the surface toward the player.
            let player_is_first = contact_pair.collider1 == player_entity;
            let normals = contact_pair.manifolds.iter().map(|manifold| {
                if player_is_first {
                    -manifold.normal
                } else {
                    manifold.normal
                }
            });

            let Some(bounce) = compute_wall_bounce(pre.0, normals, dash_tuning.dash_speed, &tuning)
            else {
                continue;
            };

            let mut body = ControlledBody {
                control: &mut *control,
                motion: &mut *motion,
                velocity: &mut velocity.0,
                gravity_scale: &mut gravity.0,
            };
            apply_bounce(bounce, &mut dash, &mut body, &dash_tuning, &tuning);

            dash_ended_events.write(DashEndedEvent {
                entity: player_entity,
            });
            bounce_events.write(WallBounceEvent {
                entity: player_entity,
                velocity_x: bounce.velocity_x,
                strong: bounce.strong,
            });
            debug!(
                "Wall bounce: pre_vx={}, bounce_vx={}, strong={}",
                pre.0.x, bounce.velocity_x, bounce.strong
            );
        }
    }
}
