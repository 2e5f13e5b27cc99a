//! Movement domain: player spawn with physics body and controller state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::feedback::Animator;
use crate::movement::{
    ControlOverride, DashState, GameLayer, JumpState, MotionState, Player, PreCollisionVelocity,
    Senses,
};

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);

/// Spawns the player at `position` with every controller in its initial state.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    let entity = commands
        .spawn((
            // Identity & controllers
            (
                Player,
                MotionState::default(),
                JumpState::default(),
                DashState::default(),
                ControlOverride::default(),
                Senses::default(),
                PreCollisionVelocity::default(),
                Animator::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    info!("Spawned player at {:?}", position);
    entity
}
