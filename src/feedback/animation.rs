//! Feedback domain: animator parameters driven by the controllers.
//!
//! The animator is the narrow interface the controllers talk to: named bool
//! parameters, one-shot triggers, and clip lengths looked up by name. Whatever
//! renders frames reads these parameters.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const PARAM_RUNNING: &str = "Running";
pub const PARAM_JUMPING: &str = "Jumping";
pub const PARAM_DEAD: &str = "Dead";

/// Named animation parameters for one entity.
#[derive(Component, Debug, Default, Clone)]
pub struct Animator {
    bools: HashMap<String, bool>,
    triggers: Vec<String>,
}

impl Animator {
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    /// Unset parameters read as false.
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn set_trigger(&mut self, name: &str) {
        if !self.triggers.iter().any(|t| t == name) {
            self.triggers.push(name.to_string());
        }
    }

    pub fn has_trigger(&self, name: &str) -> bool {
        self.triggers.iter().any(|t| t == name)
    }

    /// Hands pending triggers to the renderer and clears them.
    pub fn take_triggers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.triggers)
    }
}

/// Clip lengths in seconds, keyed by clip name (case-insensitive).
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationClips {
    pub lengths: HashMap<String, f32>,
}

impl AnimationClips {
    pub fn clip_length(&self, name: &str) -> Option<f32> {
        self.lengths
            .iter()
            .find(|(clip, _)| clip.eq_ignore_ascii_case(name))
            .map(|(_, length)| *length)
    }
}

/// Parameter names and fallbacks for the transient animations.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Bool set while the double jump plays; empty disables it
    pub double_jump_bool: String,
    /// Trigger fired instead of the bool when set
    pub double_jump_trigger: Option<String>,
    /// Clip whose length times the double-jump override
    pub double_jump_clip: Option<String>,
    pub double_jump_fallback: f32,
    pub death_clip: Option<String>,
    pub death_fallback: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            double_jump_bool: "DoubleJump".to_string(),
            double_jump_trigger: None,
            double_jump_clip: None,
            double_jump_fallback: 0.6,
            death_clip: Some("Death".to_string()),
            death_fallback: 0.5,
        }
    }
}

impl AnimationConfig {
    pub fn double_jump_duration(&self, clips: Option<&AnimationClips>) -> f32 {
        clip_or_fallback(
            clips,
            self.double_jump_clip.as_deref(),
            self.double_jump_fallback,
        )
    }

    pub fn death_duration(&self, clips: Option<&AnimationClips>) -> f32 {
        clip_or_fallback(clips, self.death_clip.as_deref(), self.death_fallback)
    }
}

/// Length of the named clip when known, otherwise the fallback; never negative.
pub fn clip_or_fallback(clips: Option<&AnimationClips>, clip: Option<&str>, fallback: f32) -> f32 {
    clip.zip(clips)
        .and_then(|(name, clips)| clips.clip_length(name))
        .unwrap_or(fallback)
        .max(0.0)
}

/// While present the ordinary `Jumping` parameter stays off so the double-jump
/// clip isn't replaced by the falling pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct DoubleJumpOverride {
    pub remaining: f32,
}

impl DoubleJumpOverride {
    /// Returns true once the override has run its course or the player landed.
    pub fn tick(&mut self, dt: f32, grounded: bool) -> bool {
        self.remaining -= dt;
        grounded || self.remaining <= 0.0
    }
}
