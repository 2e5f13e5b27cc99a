//! Respawn domain: kill zones, checkpoints, death wait, and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::feedback::{AnimationClips, AnimationConfig, Animator, PARAM_DEAD};
use crate::movement::{
    ControlOverride, ControlsFrozen, DashState, JumpState, MotionState, Player,
    PreCollisionVelocity, Senses,
};
use crate::respawn::{
    Checkpoint, CheckpointReachedEvent, Dying, KillZone, Patrol, PlayerDiedEvent,
    PlayerRespawnedEvent, RespawnGrace, RespawnPoint, RespawnTuning,
};

const ACTIVE_CHECKPOINT_COLOR: Color = Color::srgb(0.95, 0.85, 0.2);

pub(crate) fn detect_kill_zones(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    config: Res<AnimationConfig>,
    clips: Option<Res<AnimationClips>>,
    kill_zones: Query<(), With<KillZone>>,
    mut players: Query<
        (
            &mut LinearVelocity,
            &mut DashState,
            &mut ControlOverride,
            &mut GravityScale,
            Option<&mut Animator>,
        ),
        (With<Player>, Without<Dying>),
    >,
    mut died_events: MessageWriter<PlayerDiedEvent>,
) {
    let contacts: Vec<(Entity, Entity)> = collision_events
        .read()
        .map(|event| (event.collider1, event.collider2))
        .collect();
    let killed = killed_players(
        contacts,
        |entity| kill_zones.contains(entity),
        |entity| players.contains(entity),
    );

    for player_entity in killed {
        // Already dying players are filtered out, so hazards can't re-trigger the wait
        let Ok((mut velocity, mut dash, mut control, mut gravity, animator)) =
            players.get_mut(player_entity)
        else {
            continue;
        };

        if dash.is_dashing() {
            gravity.0 = dash.saved_gravity_scale;
        }
        dash.reset();
        *control = ControlOverride::None;
        velocity.0 = Vec2::ZERO;

        if let Some(mut animator) = animator {
            animator.set_trigger(PARAM_DEAD);
        }

        let remaining = config.death_duration(clips.as_deref());
        commands
            .entity(player_entity)
            .insert((Dying { remaining }, ControlsFrozen));
        died_events.write(PlayerDiedEvent {
            entity: player_entity,
        });
        info!("Player died, respawning in {}s", remaining);
    }
}

/// Players touching a kill zone in this batch of contacts, each listed once
/// even when several hazards were hit in the same step.
pub(crate) fn killed_players(
    contacts: impl IntoIterator<Item = (Entity, Entity)>,
    is_kill_zone: impl Fn(Entity) -> bool,
    is_alive_player: impl Fn(Entity) -> bool,
) -> Vec<Entity> {
    let mut killed = Vec::new();
    for (a, b) in contacts {
        for (player, zone) in [(a, b), (b, a)] {
            if is_kill_zone(zone) && is_alive_player(player) && !killed.contains(&player) {
                killed.push(player);
            }
        }
    }
    killed
}

/// Kinematic hazards sweep back and forth; velocity carries them to the next
/// patrol position so the solver sees the motion.
pub(crate) fn move_patrolling_hazards(
    time: Res<Time>,
    mut query: Query<(&mut Patrol, &Transform, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (mut patrol, transform, mut velocity) in &mut query {
        let x = transform.translation.x;
        let next_x = patrol.step(x, dt);
        velocity.0 = Vec2::new((next_x - x) / dt, 0.0);
    }
}

/// Respawn starts only after the death wait resolves.
pub(crate) fn tick_death_and_respawn(
    mut commands: Commands,
    time: Res<Time>,
    respawn_point: Res<RespawnPoint>,
    tuning: Res<RespawnTuning>,
    mut query: Query<
        (
            Entity,
            &mut Dying,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut MotionState,
            &mut JumpState,
            &mut DashState,
            &mut ControlOverride,
            &mut Senses,
            &mut PreCollisionVelocity,
        ),
        With<Player>,
    >,
    mut respawned_events: MessageWriter<PlayerRespawnedEvent>,
) {
    let dt = time.delta_secs();

    for (
        entity,
        mut dying,
        mut transform,
        mut velocity,
        mut gravity,
        mut motion,
        mut jump,
        mut dash,
        mut control,
        mut senses,
        mut pre,
    ) in &mut query
    {
        if !dying.tick(dt) {
            continue;
        }

        let position = tuning.respawn_position(&respawn_point);
        transform.translation = position.extend(transform.translation.z);
        transform.rotation = Quat::IDENTITY;
        velocity.0 = Vec2::ZERO;
        if gravity.0.abs() < f32::EPSILON {
            gravity.0 = 1.0;
        }

        motion.reset();
        jump.reset();
        dash.reset();
        *control = ControlOverride::None;
        *senses = Senses::default();
        pre.0 = Vec2::ZERO;

        commands
            .entity(entity)
            .remove::<(Dying, ControlsFrozen)>()
            .insert((ColliderDisabled, RespawnGrace));

        respawned_events.write(PlayerRespawnedEvent { entity, position });
        info!("Player respawned at {:?}", position);
    }
}

pub(crate) fn end_respawn_grace(
    mut commands: Commands,
    query: Query<Entity, (With<RespawnGrace>, Without<Dying>)>,
) {
    for entity in &query {
        commands
            .entity(entity)
            .remove::<(ColliderDisabled, RespawnGrace)>();
    }
}

pub(crate) fn activate_checkpoints(
    mut collision_events: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    mut checkpoints: Query<(&mut Checkpoint, &GlobalTransform, Option<&mut Sprite>)>,
    mut respawn_point: ResMut<RespawnPoint>,
    mut reached_events: MessageWriter<CheckpointReachedEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, checkpoint_entity) in pairs {
            if !players.contains(player_entity) {
                continue;
            }
            let Ok((mut checkpoint, transform, sprite)) = checkpoints.get_mut(checkpoint_entity)
            else {
                continue;
            };
            if checkpoint.activated {
                continue;
            }

            checkpoint.activated = true;
            let position = transform.translation().truncate();
            respawn_point.0 = position;
            if let Some(mut sprite) = sprite {
                sprite.color = ACTIVE_CHECKPOINT_COLOR;
            }

            reached_events.write(CheckpointReachedEvent {
                checkpoint: checkpoint_entity,
                position,
            });
            info!("Checkpoint reached at {:?}", position);
        }
    }
}
