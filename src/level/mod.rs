//! Level domain: the test course the controllers are played in.
//!
//! One unit is one world unit (32 px on screen). The course runs left to
//! right: start area with the double-jump shrine and a patrolling saw,
//! stepping platforms with the dash shrine, a pit, then a checkpoint and a
//! passable wall.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{Ability, AbilityShrine, PassableWall, WallPassZone};
use crate::movement::{GameLayer, Ground, Wall, spawn_player};
use crate::respawn::{Checkpoint, KillZone, Patrol, RespawnPoint};

pub const PLAYER_START: Vec2 = Vec2::new(-18.0, -4.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_course);
    }
}

fn solid(
    color: Color,
    center: Vec2,
    size: Vec2,
    layers: CollisionLayers,
) -> (Sprite, Transform, RigidBody, Collider, CollisionLayers) {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    )
}

fn sensor(
    color: Color,
    center: Vec2,
    size: Vec2,
) -> (
    Sprite,
    Transform,
    RigidBody,
    Collider,
    Sensor,
    CollidingEntities,
    CollisionLayers,
) {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, -0.5),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollidingEntities::default(),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    )
}

pub(crate) fn spawn_test_course(mut commands: Commands, mut respawn_point: ResMut<RespawnPoint>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let passable_color = Color::srgba(0.4, 0.6, 0.9, 0.8);
    let shrine_color = Color::srgba(0.7, 0.5, 0.9, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor, split by the pit between x = 4 and x = 8
    commands.spawn((
        Ground,
        solid(
            ground_color,
            Vec2::new(-8.0, -5.0),
            Vec2::new(24.0, 1.0),
            ground_layers,
        ),
    ));
    commands.spawn((
        Ground,
        solid(
            ground_color,
            Vec2::new(14.0, -5.0),
            Vec2::new(12.0, 1.0),
            ground_layers,
        ),
    ));

    // Outer walls
    for x in [-19.75, 19.75] {
        commands.spawn((
            Wall,
            solid(
                wall_color,
                Vec2::new(x, 4.0),
                Vec2::new(0.5, 20.0),
                wall_layers,
            ),
        ));
    }

    // Platforms
    for (center, width) in [
        (Vec2::new(-12.0, -1.5), 4.0),
        (Vec2::new(-4.0, 1.5), 4.0),
        (Vec2::new(12.0, 0.0), 4.0),
    ] {
        commands.spawn((
            Ground,
            solid(
                platform_color,
                center,
                Vec2::new(width, 0.5),
                ground_layers,
            ),
        ));
    }

    // Pit
    commands.spawn((
        KillZone,
        sensor(
            Color::srgba(0.8, 0.2, 0.2, 0.5),
            Vec2::new(6.0, -9.0),
            Vec2::new(4.0, 2.0),
        ),
    ));

    // Saw sweeping the floor under the first platforms
    let saw_start = Vec2::new(-8.0, -4.1);
    commands.spawn((
        KillZone,
        Patrol::new(saw_start.x, 3.0, 3.0),
        Sprite {
            color: Color::srgb(0.85, 0.25, 0.2),
            custom_size: Some(Vec2::splat(0.8)),
            ..default()
        },
        Transform::from_xyz(saw_start.x, saw_start.y, -0.5),
        RigidBody::Kinematic,
        Collider::circle(0.4),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    commands.spawn((
        Checkpoint::default(),
        sensor(
            Color::srgba(0.6, 0.6, 0.6, 0.6),
            Vec2::new(12.0, -4.0),
            Vec2::new(1.0, 1.0),
        ),
    ));

    // Shrines
    for (ability, center) in [
        (Ability::DoubleJump, Vec2::new(-15.0, -3.75)),
        (Ability::Dash, Vec2::new(-4.0, 2.5)),
        (Ability::WallPass, Vec2::new(15.0, -3.75)),
    ] {
        commands.spawn((
            AbilityShrine { ability },
            sensor(shrine_color, center, Vec2::new(1.0, 1.5)),
        ));
    }

    let passable_wall = commands
        .spawn((
            Wall,
            PassableWall,
            solid(
                passable_color,
                Vec2::new(17.5, -2.5),
                Vec2::new(0.5, 3.0),
                wall_layers,
            ),
        ))
        .id();
    commands.spawn((
        WallPassZone {
            wall: passable_wall,
        },
        sensor(
            Color::srgba(0.4, 0.6, 0.9, 0.15),
            Vec2::new(17.5, -2.5),
            Vec2::new(3.0, 3.0),
        ),
    ));

    respawn_point.0 = PLAYER_START;
    spawn_player(&mut commands, PLAYER_START + Vec2::new(0.0, 0.5));
    info!("Spawned test course");
}
