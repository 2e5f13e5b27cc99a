//! Abilities domain: unlock requests and notifications.

use bevy::ecs::message::Message;

use crate::abilities::Ability;

/// External trigger (shrine, dialogue, progress) asking for an unlock
#[derive(Debug)]
pub struct UnlockAbilityRequest {
    pub ability: Ability,
}

impl Message for UnlockAbilityRequest {}

/// Fired once per ability, the first time it is unlocked
#[derive(Debug)]
pub struct AbilityUnlockedEvent {
    pub ability: Ability,
}

impl Message for AbilityUnlockedEvent {}

/// Entering a world swaps the ability set for that world's preset
#[derive(Debug)]
pub struct SelectWorldRequest {
    pub world_number: i64,
}

impl Message for SelectWorldRequest {}

/// Clears every ability (new game)
#[derive(Debug)]
pub struct ResetAbilitiesRequest;

impl Message for ResetAbilitiesRequest {}
