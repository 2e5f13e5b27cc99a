//! Feedback domain: animation parameters, sound cues, and sprite feedback for
//! the character controllers.

pub(crate) mod animation;
mod audio;
mod systems;
#[cfg(test)]
mod tests;

pub use animation::{
    AnimationClips, AnimationConfig, Animator, DoubleJumpOverride, PARAM_DEAD, PARAM_JUMPING,
    PARAM_RUNNING,
};
pub use audio::{PlayerSfx, SfxConfig, SfxCue, SfxCueEvent};

use bevy::prelude::*;

use crate::feedback::audio::{load_player_sfx, play_sfx_cues};
use crate::feedback::systems::{
    drive_locomotion_params, emit_sfx_cues, flip_sprite_to_facing, flush_animator_triggers,
    start_double_jump_animation, tick_double_jump_animation, tint_sprite_for_dash,
};

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClips>()
            .init_resource::<AnimationConfig>()
            .init_resource::<SfxConfig>()
            .add_message::<SfxCueEvent>()
            .add_systems(PostStartup, load_player_sfx)
            .add_systems(
                Update,
                (
                    drive_locomotion_params,
                    start_double_jump_animation,
                    tick_double_jump_animation,
                    flip_sprite_to_facing,
                    tint_sprite_for_dash,
                    (emit_sfx_cues, play_sfx_cues).chain(),
                    flush_animator_triggers,
                )
                    .chain(),
            );
    }
}
