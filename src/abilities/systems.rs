//! Abilities domain: unlock handling, persistence, and trigger volumes.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::components::wall_pass_open;
use crate::abilities::{
    Abilities, Ability, AbilityShrine, AbilityUnlockedEvent, CURRENT_WORLD_KEY,
    ResetAbilitiesRequest, SelectWorldRequest, UnlockAbilityRequest, WallPassZone,
};
use crate::movement::{MovementInput, Player};
use crate::progress::{KeyValueStore, ProgressStore};

pub(crate) fn load_abilities(store: Option<Res<ProgressStore>>, mut abilities: ResMut<Abilities>) {
    let Some(store) = store else {
        warn!("No progress store; abilities start locked");
        return;
    };

    *abilities = Abilities::load(&*store.0);
    info!("Loaded abilities: [{}]", abilities.to_storage_string());
}

pub(crate) fn handle_unlock_requests(
    mut requests: MessageReader<UnlockAbilityRequest>,
    mut abilities: ResMut<Abilities>,
    mut unlocked_events: MessageWriter<AbilityUnlockedEvent>,
) {
    for request in requests.read() {
        if abilities.unlock(request.ability) {
            info!("Ability unlocked: {:?}", request.ability);
            unlocked_events.write(AbilityUnlockedEvent {
                ability: request.ability,
            });
        } else {
            debug!("Ability {:?} already unlocked", request.ability);
        }
    }
}

pub(crate) fn handle_select_world(
    mut requests: MessageReader<SelectWorldRequest>,
    mut abilities: ResMut<Abilities>,
    mut store: Option<ResMut<ProgressStore>>,
    mut unlocked_events: MessageWriter<AbilityUnlockedEvent>,
) {
    for request in requests.read() {
        if let Some(store) = store.as_mut() {
            store.0.set_int(CURRENT_WORLD_KEY, request.world_number);
        }

        let granted = abilities.apply_world_preset(request.world_number);
        info!(
            "World {} selected: abilities [{}]",
            request.world_number,
            abilities.to_storage_string()
        );
        for ability in granted {
            unlocked_events.write(AbilityUnlockedEvent { ability });
        }
    }
}

pub(crate) fn handle_reset_requests(
    mut requests: MessageReader<ResetAbilitiesRequest>,
    mut abilities: ResMut<Abilities>,
) {
    if requests.read().count() > 0 {
        abilities.reset_all();
        info!("All abilities reset");
    }
}

/// Runs whenever the set changed, so every mutation reaches the store.
pub(crate) fn persist_abilities(abilities: Res<Abilities>, store: Option<ResMut<ProgressStore>>) {
    let Some(mut store) = store else {
        return;
    };
    abilities.persist(&mut *store.0);
    store.save_or_warn();
    debug!("Persisted abilities: [{}]", abilities.to_storage_string());
}

pub(crate) fn interact_with_shrines(
    input: Res<MovementInput>,
    players: Query<(), With<Player>>,
    shrines: Query<(&AbilityShrine, &CollidingEntities)>,
    mut requests: MessageWriter<UnlockAbilityRequest>,
) {
    if !input.interact_just_pressed {
        return;
    }

    for (shrine, colliding) in &shrines {
        if colliding.iter().any(|entity| players.contains(*entity)) {
            requests.write(UnlockAbilityRequest {
                ability: shrine.ability,
            });
        }
    }
}

pub(crate) fn update_wall_pass(
    mut commands: Commands,
    input: Res<MovementInput>,
    abilities: Option<Res<Abilities>>,
    players: Query<(), With<Player>>,
    zones: Query<(&WallPassZone, &CollidingEntities)>,
    disabled_walls: Query<(), With<ColliderDisabled>>,
) {
    let unlocked = abilities.is_some_and(|a| a.has(Ability::WallPass));

    for (zone, colliding) in &zones {
        let inside = colliding.iter().any(|entity| players.contains(*entity));
        let currently_open = disabled_walls.contains(zone.wall);
        let open = wall_pass_open(inside, unlocked, input.wall_pass_held, currently_open);

        if open && !currently_open {
            commands.entity(zone.wall).insert(ColliderDisabled);
            debug!("Wall pass: wall {:?} opened", zone.wall);
        } else if !open && currently_open {
            commands.entity(zone.wall).remove::<ColliderDisabled>();
            debug!("Wall pass: wall {:?} closed", zone.wall);
        }
    }
}
