//! Feedback domain: fire-and-forget sound cues.

use bevy::audio::Volume;
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCue {
    Jump,
    DoubleJump,
    Dash,
    WallHit,
}

#[derive(Debug)]
pub struct SfxCueEvent {
    pub cue: SfxCue,
}

impl Message for SfxCueEvent {}

/// Asset paths for each cue; `None` leaves the cue silent.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SfxConfig {
    pub jump: Option<String>,
    pub double_jump: Option<String>,
    pub dash: Option<String>,
    pub wall_hit: Option<String>,
    pub volume: f32,
}

impl Default for SfxConfig {
    fn default() -> Self {
        Self {
            jump: Some("audio/jump.ogg".to_string()),
            double_jump: Some("audio/double_jump.ogg".to_string()),
            dash: Some("audio/dash.ogg".to_string()),
            wall_hit: Some("audio/wall_hit.ogg".to_string()),
            volume: 1.0,
        }
    }
}

/// Loaded clip handles.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlayerSfx {
    pub jump: Option<Handle<AudioSource>>,
    pub double_jump: Option<Handle<AudioSource>>,
    pub dash: Option<Handle<AudioSource>>,
    pub wall_hit: Option<Handle<AudioSource>>,
    pub volume: f32,
}

impl PlayerSfx {
    /// Double jump reuses the jump clip when it has none of its own.
    pub fn clip_for(&self, cue: SfxCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SfxCue::Jump => self.jump.as_ref(),
            SfxCue::DoubleJump => self.double_jump.as_ref().or(self.jump.as_ref()),
            SfxCue::Dash => self.dash.as_ref(),
            SfxCue::WallHit => self.wall_hit.as_ref(),
        }
    }
}

pub(crate) fn load_player_sfx(
    mut commands: Commands,
    config: Res<SfxConfig>,
    asset_server: Res<AssetServer>,
) {
    let load = |path: &Option<String>| path.as_ref().map(|p| asset_server.load(p.clone()));

    commands.insert_resource(PlayerSfx {
        jump: load(&config.jump),
        double_jump: load(&config.double_jump),
        dash: load(&config.dash),
        wall_hit: load(&config.wall_hit),
        volume: config.volume.clamp(0.0, 1.0),
    });
}

pub(crate) fn play_sfx_cues(
    mut commands: Commands,
    mut cues: MessageReader<SfxCueEvent>,
    sfx: Option<Res<PlayerSfx>>,
) {
    for event in cues.read() {
        let Some(sfx) = sfx.as_ref() else {
            continue;
        };
        let Some(clip) = sfx.clip_for(event.cue) else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(clip.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(sfx.volume)),
        ));
    }
}
