//! Feedback domain: translate controller state and messages into animator
//! parameters, sound cues, and sprite tweaks.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::feedback::animation::{
    AnimationClips, AnimationConfig, Animator, DoubleJumpOverride, PARAM_JUMPING, PARAM_RUNNING,
};
use crate::feedback::audio::{SfxCue, SfxCueEvent};
use crate::movement::jump::JumpKind;
use crate::movement::{
    DashReadyEvent, DashStartedEvent, Facing, JumpedEvent, MotionState, MovementInput, Player,
    Senses, WallBounceEvent,
};
use crate::respawn::PlayerRespawnedEvent;

const DASH_TINT: Color = Color::srgb(0.5, 0.5, 0.5);
const DEFAULT_TINT: Color = Color::srgb(0.9, 0.9, 0.9);

pub(crate) fn emit_sfx_cues(
    mut jumped: MessageReader<JumpedEvent>,
    mut dashed: MessageReader<DashStartedEvent>,
    mut bounced: MessageReader<WallBounceEvent>,
    mut cues: MessageWriter<SfxCueEvent>,
) {
    for event in jumped.read() {
        let cue = match event.kind {
            JumpKind::Ground => SfxCue::Jump,
            JumpKind::Double => SfxCue::DoubleJump,
        };
        cues.write(SfxCueEvent { cue });
    }
    for _ in dashed.read() {
        cues.write(SfxCueEvent { cue: SfxCue::Dash });
    }
    // Only hard hits make noise
    for event in bounced.read() {
        if event.strong {
            cues.write(SfxCueEvent {
                cue: SfxCue::WallHit,
            });
        }
    }
}

pub(crate) fn drive_locomotion_params(
    input: Res<MovementInput>,
    mut query: Query<
        (&Senses, &mut Animator, Option<&DoubleJumpOverride>),
        With<Player>,
    >,
) {
    for (senses, mut animator, double_jump) in &mut query {
        animator.set_bool(PARAM_RUNNING, input.axis.abs() > 0.01);
        let airborne = !senses.grounded;
        animator.set_bool(PARAM_JUMPING, airborne && double_jump.is_none());
    }
}

pub(crate) fn start_double_jump_animation(
    mut commands: Commands,
    mut jumped: MessageReader<JumpedEvent>,
    config: Res<AnimationConfig>,
    clips: Option<Res<AnimationClips>>,
    mut animators: Query<&mut Animator>,
) {
    for event in jumped.read() {
        if event.kind != JumpKind::Double {
            continue;
        }
        let Ok(mut animator) = animators.get_mut(event.entity) else {
            continue;
        };

        if let Some(trigger) = config.double_jump_trigger.as_deref() {
            animator.set_trigger(trigger);
        } else if !config.double_jump_bool.is_empty() {
            animator.set_bool(&config.double_jump_bool, true);
        }
        animator.set_bool(PARAM_JUMPING, false);

        // Restarting replaces any override still running from an earlier jump
        let remaining = config.double_jump_duration(clips.as_deref());
        commands
            .entity(event.entity)
            .insert(DoubleJumpOverride { remaining });
    }
}

pub(crate) fn tick_double_jump_animation(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<AnimationConfig>,
    mut query: Query<(Entity, &Senses, &mut Animator, &mut DoubleJumpOverride)>,
) {
    let dt = time.delta_secs();

    for (entity, senses, mut animator, mut double_jump) in &mut query {
        if !double_jump.tick(dt, senses.grounded) {
            continue;
        }
        if !config.double_jump_bool.is_empty() {
            animator.set_bool(&config.double_jump_bool, false);
        }
        animator.set_bool(PARAM_JUMPING, !senses.grounded);
        commands.entity(entity).remove::<DoubleJumpOverride>();
    }
}

pub(crate) fn flip_sprite_to_facing(mut query: Query<(&MotionState, &mut Sprite), With<Player>>) {
    for (motion, mut sprite) in &mut query {
        let flip = motion.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Gray while the dash is spent, back to normal once it is ready again.
pub(crate) fn tint_sprite_for_dash(
    mut started: MessageReader<DashStartedEvent>,
    mut ready: MessageReader<DashReadyEvent>,
    mut respawned: MessageReader<PlayerRespawnedEvent>,
    mut sprites: Query<&mut Sprite, With<Player>>,
) {
    for event in started.read() {
        if let Ok(mut sprite) = sprites.get_mut(event.entity) {
            sprite.color = DASH_TINT;
        }
    }
    let restored = ready
        .read()
        .map(|event| event.entity)
        .chain(respawned.read().map(|event| event.entity));
    for entity in restored {
        if let Ok(mut sprite) = sprites.get_mut(entity) {
            sprite.color = DEFAULT_TINT;
        }
    }
}

/// Hands fired triggers to the renderer. There is no skeletal animation yet,
/// so they are only logged.
pub(crate) fn flush_animator_triggers(mut query: Query<(Entity, &mut Animator)>) {
    for (entity, mut animator) in &mut query {
        for trigger in animator.take_triggers() {
            debug!("Animator trigger: entity={:?}, trigger={}", entity, trigger);
        }
    }
}
