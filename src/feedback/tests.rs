use super::animation::clip_or_fallback;
use super::*;
use bevy::prelude::*;

#[test]
fn unset_animator_bools_read_false() {
    let mut animator = Animator::default();
    assert!(!animator.get_bool(PARAM_RUNNING));

    animator.set_bool(PARAM_RUNNING, true);
    assert!(animator.get_bool(PARAM_RUNNING));
    assert!(!animator.get_bool(PARAM_JUMPING));
}

#[test]
fn triggers_are_deduplicated_and_drained() {
    let mut animator = Animator::default();
    animator.set_trigger(PARAM_DEAD);
    animator.set_trigger(PARAM_DEAD);
    assert!(animator.has_trigger(PARAM_DEAD));

    let fired = animator.take_triggers();
    assert_eq!(fired, vec![PARAM_DEAD.to_string()]);
    assert!(!animator.has_trigger(PARAM_DEAD));
    assert!(animator.take_triggers().is_empty());
}

#[test]
fn clip_lookup_ignores_case() {
    let mut clips = AnimationClips::default();
    clips.lengths.insert("Death".to_string(), 1.25);

    assert_eq!(clips.clip_length("death"), Some(1.25));
    assert_eq!(clips.clip_length("DEATH"), Some(1.25));
    assert_eq!(clips.clip_length("DoubleJump"), None);
}

#[test]
fn clip_durations_fall_back_when_unknown() {
    let mut clips = AnimationClips::default();
    clips.lengths.insert("Flip".to_string(), 0.4);

    assert_eq!(clip_or_fallback(Some(&clips), Some("flip"), 0.6), 0.4);
    assert_eq!(clip_or_fallback(Some(&clips), Some("Spin"), 0.6), 0.6);
    assert_eq!(clip_or_fallback(None, Some("Flip"), 0.6), 0.6);
    assert_eq!(clip_or_fallback(Some(&clips), None, 0.6), 0.6);
    assert_eq!(clip_or_fallback(None, None, -1.0), 0.0);
}

#[test]
fn death_duration_uses_configured_clip() {
    let config = AnimationConfig::default();
    assert_eq!(config.death_duration(None), config.death_fallback);

    let mut clips = AnimationClips::default();
    clips.lengths.insert("Death".to_string(), 0.75);
    assert_eq!(config.death_duration(Some(&clips)), 0.75);
    assert_eq!(
        config.double_jump_duration(Some(&clips)),
        config.double_jump_fallback
    );
}

#[test]
fn double_jump_override_ends_on_timeout_or_landing() {
    let mut timed = DoubleJumpOverride { remaining: 0.5 };
    assert!(!timed.tick(0.25, false));
    assert!(timed.tick(0.25, false));

    let mut landed = DoubleJumpOverride { remaining: 0.5 };
    assert!(landed.tick(0.125, true));
}

#[test]
fn double_jump_cue_reuses_jump_clip() {
    let jump: Handle<AudioSource> = Handle::default();
    let sfx = PlayerSfx {
        jump: Some(jump.clone()),
        volume: 1.0,
        ..default()
    };

    assert_eq!(sfx.clip_for(SfxCue::DoubleJump), Some(&jump));
    assert_eq!(sfx.clip_for(SfxCue::Jump), Some(&jump));
    assert!(sfx.clip_for(SfxCue::Dash).is_none());
    assert!(sfx.clip_for(SfxCue::WallHit).is_none());
}
