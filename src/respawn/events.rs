//! Respawn domain: death and respawn notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub entity: Entity,
}

impl Message for PlayerDiedEvent {}

#[derive(Debug)]
pub struct PlayerRespawnedEvent {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for PlayerRespawnedEvent {}

#[derive(Debug)]
pub struct CheckpointReachedEvent {
    pub checkpoint: Entity,
    pub position: Vec2,
}

impl Message for CheckpointReachedEvent {}
