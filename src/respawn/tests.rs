use super::*;
use bevy::prelude::*;

#[test]
fn death_wait_resolves_after_its_duration() {
    let mut dying = Dying { remaining: 0.5 };
    assert!(!dying.tick(0.25));
    assert!(dying.tick(0.25));
}

#[test]
fn zero_length_death_resolves_immediately() {
    let mut dying = Dying { remaining: 0.0 };
    assert!(dying.tick(0.0));
}

#[test]
fn respawn_position_is_lifted_above_the_checkpoint() {
    let tuning = RespawnTuning::default();
    let point = RespawnPoint(Vec2::new(12.0, -3.0));
    assert_eq!(tuning.respawn_position(&point), Vec2::new(12.0, -2.5));
}

#[test]
fn checkpoints_start_inactive() {
    assert!(!Checkpoint::default().activated);
}

#[test]
fn overlapping_kill_zones_kill_once() {
    let mut world = World::new();
    let player = world.spawn_empty().id();
    let spikes = world.spawn_empty().id();
    let saw = world.spawn_empty().id();
    let crate_box = world.spawn_empty().id();

    let contacts = [(player, spikes), (saw, player), (crate_box, spikes)];
    let killed = super::systems::killed_players(
        contacts,
        |e| e == spikes || e == saw,
        |e| e == player,
    );
    assert_eq!(killed, vec![player]);
}

#[test]
fn kill_zone_ignores_non_players() {
    let mut world = World::new();
    let zone = world.spawn_empty().id();
    let debris = world.spawn_empty().id();

    let killed = super::systems::killed_players([(debris, zone)], |e| e == zone, |_| false);
    assert!(killed.is_empty());
}

#[test]
fn patrol_sweeps_both_sides_of_its_start() {
    let mut patrol = Patrol::new(0.0, 3.0, 3.0);

    let x = patrol.step(0.0, 0.5);
    assert_eq!(x, 1.5);
    let x = patrol.step(x, 0.5);
    assert_eq!(x, 3.0);
    assert_eq!(patrol.target_x, -3.0);

    let x = patrol.step(x, 0.5);
    assert_eq!(x, 1.5);
    let x = patrol.step(x, 1.0);
    assert_eq!(x, -1.5);
    let x = patrol.step(x, 0.5);
    assert_eq!(x, -3.0);
    assert_eq!(patrol.target_x, 3.0);
}
