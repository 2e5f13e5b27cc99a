use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{
    Abilities, Ability, ResetAbilitiesRequest, SelectWorldRequest, UnlockAbilityRequest,
};
use crate::debug::{DebugInfoOverlay, DebugState, Noclip, enter_noclip, noclip_velocity};
use crate::movement::{
    ControlOverride, ControlsFrozen, DashReadyEvent, DashState, MotionState, MovementTuning,
    Player, Senses,
};
use crate::respawn::Dying;

/// Toggle noclip with F1
pub(crate) fn toggle_noclip(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut ready_events: MessageWriter<DashReadyEvent>,
    mut player_query: Query<
        (
            Entity,
            &mut GravityScale,
            &mut LinearVelocity,
            &mut DashState,
            &mut ControlOverride,
            &mut MotionState,
            Option<&Noclip>,
        ),
        (With<Player>, Without<Dying>),
    >,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    for (entity, mut gravity, mut velocity, mut dash, mut control, mut motion, noclip) in
        &mut player_query
    {
        if let Some(noclip) = noclip {
            gravity.0 = noclip.saved_gravity_scale;
            velocity.0 = Vec2::ZERO;
            motion.reset();
            commands
                .entity(entity)
                .remove::<(Noclip, ControlsFrozen, ColliderDisabled)>();
            debug_state.noclip = false;
        } else {
            let (noclip, dash_refreshed) = enter_noclip(&mut dash, &mut control, &mut gravity.0);
            // The dash comes back ready, so its spent tint has to clear too
            if dash_refreshed {
                ready_events.write(DashReadyEvent { entity });
            }
            commands
                .entity(entity)
                .insert((noclip, ControlsFrozen, ColliderDisabled));
            debug_state.noclip = true;
        }
    }

    let msg = if debug_state.noclip {
        "Noclip ON"
    } else {
        "Noclip OFF"
    };
    debug_state.set_message(msg, 2.0);
    info!("[DEBUG] {}", msg);
}

/// Handle Ctrl+key shortcuts for ability and world actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut select_world: MessageWriter<SelectWorldRequest>,
    mut unlock: MessageWriter<UnlockAbilityRequest>,
    mut reset: MessageWriter<ResetAbilitiesRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let worlds = [
        (KeyCode::Digit1, 1),
        (KeyCode::Digit2, 2),
        (KeyCode::Digit3, 3),
        (KeyCode::Digit4, 4),
    ];
    for (key, world_number) in worlds {
        if keyboard.just_pressed(key) {
            select_world.write(SelectWorldRequest { world_number });
            debug_state.set_message(format!("Entered world {}", world_number), 2.0);
            info!("[DEBUG] Entered world {}", world_number);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyU) {
        for ability in Ability::ALL {
            unlock.write(UnlockAbilityRequest { ability });
        }
        debug_state.set_message("All abilities unlocked", 2.0);
        info!("[DEBUG] All abilities unlocked");
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        reset.write(ResetAbilitiesRequest);
        debug_state.set_message("Abilities reset", 2.0);
        info!("[DEBUG] Abilities reset");
    }

    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.show_info = !debug_state.show_info;
    }
}

/// WASD flight while noclip is on
pub(crate) fn apply_noclip_movement(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, (With<Player>, With<Noclip>)>,
) {
    let axis = |negative: KeyCode, positive: KeyCode| {
        let mut value = 0.0;
        if keyboard.pressed(negative) {
            value -= 1.0;
        }
        if keyboard.pressed(positive) {
            value += 1.0;
        }
        value
    };
    let input = Vec2::new(
        axis(KeyCode::KeyA, KeyCode::KeyD),
        axis(KeyCode::KeyS, KeyCode::KeyW),
    );

    for mut velocity in &mut query {
        velocity.0 = noclip_velocity(
            velocity.0,
            input,
            tuning.boosted_max_speed,
            time.delta_secs(),
        );
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Readout panel pinned under the top-right corner
fn spawn_controller_readout(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.85, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(48.0),
            min_width: Val::Px(220.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.8)),
        ZIndex(600),
    ));
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    abilities: Res<Abilities>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &Senses,
            &MotionState,
            &DashState,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_controller_readout(&mut commands);
        return;
    }

    if let (Some((transform, velocity, senses, motion, dash)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let unlocked: Vec<&str> = abilities.iter().map(|a| a.key()).collect();
        **text = format!(
            "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nMomentum: {:.2}\nGrounded: {}\nWalls: L={} R={}\nDash: {:?}\nAbilities: {}\nNoclip: {}\n{}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            motion.momentum.x,
            senses.grounded,
            senses.wall_left,
            senses.wall_right,
            dash.phase,
            unlocked.join(", "),
            debug_state.noclip,
            debug_state
                .status_message
                .as_ref()
                .map(|(msg, _)| msg.as_str())
                .unwrap_or(""),
        );
    }
}
