//! Abilities domain: unit tests for the unlock set and trigger helpers.

use super::components::wall_pass_open;
use super::{Abilities, Ability, UNLOCKED_ABILITIES_KEY};
use crate::progress::{KeyValueStore, MemoryStore};

#[test]
fn test_abilities_start_locked() {
    let abilities = Abilities::default();
    for ability in Ability::ALL {
        assert!(!abilities.has(ability));
    }
}

#[test]
fn test_unlock_is_idempotent() {
    let mut abilities = Abilities::default();
    assert!(abilities.unlock(Ability::Dash));
    assert!(!abilities.unlock(Ability::Dash));
    assert!(abilities.has(Ability::Dash));
    assert!(!abilities.has(Ability::DoubleJump));
}

#[test]
fn test_reset_all_relocks_everything() {
    let mut abilities = Abilities::default();
    abilities.unlock(Ability::DoubleJump);
    abilities.unlock(Ability::WallPass);
    abilities.reset_all();

    for ability in Ability::ALL {
        assert!(!abilities.has(ability));
    }
    // Unlocking again after a reset counts as a fresh unlock
    assert!(abilities.unlock(Ability::DoubleJump));
}

#[test]
fn test_storage_string_is_stable_and_parses_back() {
    let mut abilities = Abilities::default();
    abilities.unlock(Ability::WallPass);
    abilities.unlock(Ability::DoubleJump);

    assert_eq!(abilities.to_storage_string(), "DoubleJump,WallPass");
    assert_eq!(
        Abilities::from_storage_string("DoubleJump,WallPass"),
        abilities
    );
}

#[test]
fn test_storage_string_skips_unknown_and_empty_entries() {
    let abilities = Abilities::from_storage_string("Dash,,Teleport, DoubleJump");
    assert!(abilities.has(Ability::Dash));
    assert!(abilities.has(Ability::DoubleJump));
    assert!(!abilities.has(Ability::WallPass));
}

#[test]
fn test_persist_and_load_through_store() {
    let mut store = MemoryStore::default();
    let mut abilities = Abilities::default();
    abilities.unlock(Ability::Dash);
    abilities.persist(&mut store);

    assert_eq!(store.get_string(UNLOCKED_ABILITIES_KEY, ""), "Dash");
    assert_eq!(Abilities::load(&store), abilities);
}

#[test]
fn test_load_from_empty_store_is_locked() {
    let store = MemoryStore::default();
    assert_eq!(Abilities::load(&store), Abilities::default());
}

#[test]
fn test_world_presets_add_one_ability_per_world() {
    assert!(Ability::unlocked_in_world(1).is_empty());
    assert_eq!(Ability::unlocked_in_world(2), &[Ability::DoubleJump]);
    assert_eq!(
        Ability::unlocked_in_world(3),
        &[Ability::DoubleJump, Ability::Dash]
    );
    assert_eq!(Ability::unlocked_in_world(4), &Ability::ALL);
    assert_eq!(Ability::unlocked_in_world(9), &Ability::ALL);
}

#[test]
fn test_world_preset_replaces_set_and_reports_new_unlocks() {
    let mut abilities = Abilities::default();
    abilities.unlock(Ability::WallPass);
    abilities.unlock(Ability::DoubleJump);

    let granted = abilities.apply_world_preset(3);

    assert_eq!(granted, vec![Ability::Dash]);
    assert!(abilities.has(Ability::DoubleJump));
    assert!(abilities.has(Ability::Dash));
    assert!(!abilities.has(Ability::WallPass));
}

#[test]
fn test_wall_pass_needs_zone_ability_and_key() {
    assert!(wall_pass_open(true, true, true, false));
    assert!(!wall_pass_open(true, false, true, false));
    assert!(!wall_pass_open(true, true, false, false));
    assert!(!wall_pass_open(false, true, true, false));
}

#[test]
fn test_wall_pass_stays_open_until_zone_exit() {
    // Key released while still inside
    assert!(wall_pass_open(true, true, false, true));
    // Leaving the zone closes it regardless of key
    assert!(!wall_pass_open(false, true, true, true));
}
