//! Movement domain: messages emitted by the character controllers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::jump::JumpKind;

/// Emitted when a ground or double jump starts
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct DashStartedEvent {
    pub entity: Entity,
    pub direction: f32,
}

impl Message for DashStartedEvent {}

/// Emitted when a dash stops (expired, cancelled by a jump, or by a bounce)
#[derive(Debug)]
pub struct DashEndedEvent {
    pub entity: Entity,
}

impl Message for DashEndedEvent {}

/// Emitted when the dash cooldown has elapsed
#[derive(Debug)]
pub struct DashReadyEvent {
    pub entity: Entity,
}

impl Message for DashReadyEvent {}

#[derive(Debug)]
pub struct WallBounceEvent {
    pub entity: Entity,
    pub velocity_x: f32,
    pub strong: bool,
}

impl Message for WallBounceEvent {}
