mod abilities;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod feedback;
mod level;
mod movement;
mod progress;
mod respawn;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Turbo Trip".to_string(),
                resolution: (1280_u32, 720_u32).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            progress::ProgressPlugin,
            abilities::AbilitiesPlugin,
            movement::MovementPlugin,
            feedback::FeedbackPlugin,
            respawn::RespawnPlugin,
            level::LevelPlugin,
        ))
        .add_plugins(dev_plugins)
        .run();
}

#[cfg(feature = "dev-tools")]
fn dev_plugins(app: &mut App) {
    app.add_plugins(debug::DebugPlugin);
}

#[cfg(not(feature = "dev-tools"))]
fn dev_plugins(_app: &mut App) {}
