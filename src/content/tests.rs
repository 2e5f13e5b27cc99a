use super::*;
use std::path::Path;

#[test]
fn empty_tuning_file_keeps_defaults() {
    let tuning = parse_player_tuning("inline", "()").expect("empty struct parses");
    assert_eq!(tuning.movement.base_max_speed, 5.0);
    assert_eq!(tuning.dash.dash_cooldown, 1.0);
    assert_eq!(tuning.respawn.respawn_y_offset, 0.5);
}

#[test]
fn partial_sections_override_only_named_fields() {
    let source = r#"(
        movement: (base_max_speed: 7.5),
        wall_bounce: (strong_hit_multiplier: 1.5),
    )"#;
    let tuning = parse_player_tuning("inline", source).expect("partial tuning parses");

    assert_eq!(tuning.movement.base_max_speed, 7.5);
    assert_eq!(tuning.movement.boosted_max_speed, 6.0);
    assert_eq!(tuning.wall_bounce.strong_hit_multiplier, 1.5);
    assert_eq!(tuning.wall_bounce.min_bounce_speed, 3.0);
}

#[test]
fn optional_fields_accept_bare_values() {
    let source = r#"(animation: (death_clip: "Explode"), sfx: (dash: None))"#;
    let tuning = parse_player_tuning("inline", source).expect("implicit Some parses");

    assert_eq!(tuning.animation.death_clip.as_deref(), Some("Explode"));
    assert!(tuning.sfx.dash.is_none());
    assert!(tuning.sfx.jump.is_some());
}

#[test]
fn malformed_tuning_reports_file_and_parse_error() {
    let err = parse_player_tuning("broken.ron", "(movement: (base_max_speed: fast))")
        .expect_err("bad value is rejected");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("Parse error"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_player_tuning(Path::new("does/not/exist.ron")).expect_err("no such file");
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn shipped_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PLAYER_TUNING_PATH);
    let tuning = load_player_tuning(&path).expect("shipped tuning parses");
    assert_eq!(tuning.jump.max_hold_time, 0.75);
    assert_eq!(tuning.animation_clips.clip_length("death"), Some(0.5));
}
