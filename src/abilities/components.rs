//! Abilities domain: trigger volumes tied to abilities.

use bevy::prelude::*;

use crate::abilities::Ability;

/// Sensor volume that grants its ability when the player interacts inside it
#[derive(Component, Debug)]
pub struct AbilityShrine {
    pub ability: Ability,
}

/// Sensor volume in front of a passable wall
#[derive(Component, Debug)]
pub struct WallPassZone {
    /// The wall collider that stops blocking while the player passes
    pub wall: Entity,
}

/// Marker on a wall that can be passed with the wall-pass ability
#[derive(Component, Debug)]
pub struct PassableWall;

/// Whether a passable wall should stop blocking this tick. Once opened it
/// stays open until the player leaves the zone.
pub fn wall_pass_open(inside: bool, unlocked: bool, key_held: bool, currently_open: bool) -> bool {
    inside && (currently_open || (unlocked && key_held))
}
