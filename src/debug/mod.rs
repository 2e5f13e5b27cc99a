//! Debug tools for fast iteration on the controllers (dev-tools feature).
//!
//! Hotkeys:
//! - F1: toggle noclip (free flight, no gravity, no collisions)
//! - Ctrl+1..4: enter a world and apply its ability preset
//! - Ctrl+U: unlock every ability
//! - Ctrl+R: reset abilities
//! - Ctrl+I: toggle the controller info overlay

mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::debug::systems::{
    apply_noclip_movement, handle_debug_hotkeys, toggle_noclip, update_debug_info_overlay,
    update_status_message,
};
use crate::movement::{ControlOverride, DashState};

/// Seconds-to-target response of noclip flight
pub const NOCLIP_RESPONSE: f32 = 10.0;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub noclip: bool,
    /// Whether the controller info overlay is visible
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Free-flight state; remembers the gravity scale to restore on exit
#[derive(Component, Debug, Clone, Copy)]
pub struct Noclip {
    pub saved_gravity_scale: f32,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Suspends the dash and gravity for free flight. Returns the noclip state to
/// insert and whether the dash went from spent back to ready.
pub fn enter_noclip(
    dash: &mut DashState,
    control: &mut ControlOverride,
    gravity_scale: &mut f32,
) -> (Noclip, bool) {
    let saved_gravity_scale = if dash.is_dashing() {
        dash.saved_gravity_scale
    } else {
        *gravity_scale
    };
    let dash_refreshed = dash.reset();
    *control = ControlOverride::None;
    *gravity_scale = 0.0;

    (
        Noclip {
            saved_gravity_scale,
        },
        dash_refreshed,
    )
}

/// Velocity eased toward `input * max_speed`; both axes, no gravity.
pub fn noclip_velocity(current: Vec2, input: Vec2, max_speed: f32, dt: f32) -> Vec2 {
    let target = input.clamp_length_max(1.0) * max_speed;
    current.lerp(target, (NOCLIP_RESPONSE * dt).clamp(0.0, 1.0))
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_noclip,
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, apply_noclip_movement.run_if(gameplay_active));
    }
}
