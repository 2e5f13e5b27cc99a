//! Core domain: camera setup and pause plumbing.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;
use crate::movement::Player;

/// Levels are authored in world units (one unit per tile), so the camera zooms in.
const PIXELS_PER_UNIT: f32 = 32.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}

/// Camera centred on `target` at its own depth.
pub fn follow_position(camera: Vec3, target: Vec2) -> Vec3 {
    target.extend(camera.z)
}

/// Snaps the camera onto the player every frame.
pub(crate) fn follow_player(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };
    camera.translation = follow_position(camera.translation, player.translation.truncate());
}

pub(crate) fn toggle_pause_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        paused.toggle("pause_menu");
        info!("Pause menu toggled: paused={}", paused.is_paused());
    }
}

/// Freezes virtual time (and with it the fixed step) while anything holds a pause.
pub(crate) fn sync_virtual_time(paused: Res<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    if !paused.is_changed() {
        return;
    }
    if paused.is_paused() {
        time.pause();
    } else {
        time.unpause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_keeps_camera_depth() {
        let camera = Vec3::new(0.0, 0.0, 999.9);
        assert_eq!(
            follow_position(camera, Vec2::new(-8.0, 4.5)),
            Vec3::new(-8.0, 4.5, 999.9)
        );
    }
}
