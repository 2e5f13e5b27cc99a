use super::*;
use bevy::prelude::Vec2;

#[test]
fn noclip_eases_toward_input_speed() {
    let v = noclip_velocity(Vec2::ZERO, Vec2::new(1.0, 0.0), 6.0, 0.05);
    assert!(v.x > 0.0 && v.x < 6.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn noclip_reaches_target_on_large_steps() {
    let v = noclip_velocity(Vec2::new(3.0, -2.0), Vec2::new(0.0, 1.0), 6.0, 1.0);
    assert_eq!(v, Vec2::new(0.0, 6.0));
}

#[test]
fn noclip_diagonal_is_not_faster() {
    let v = noclip_velocity(Vec2::ZERO, Vec2::new(1.0, 1.0), 6.0, 1.0);
    assert!((v.length() - 6.0).abs() < 1e-4);
}

#[test]
fn noclip_release_decays_to_rest() {
    let v = noclip_velocity(Vec2::new(4.0, 4.0), Vec2::ZERO, 6.0, 1.0);
    assert_eq!(v, Vec2::ZERO);
}

#[test]
fn status_message_is_replaced() {
    let mut state = DebugState::default();
    state.set_message("first", 2.0);
    state.set_message("second", 1.0);
    assert_eq!(state.status_message, Some(("second".to_string(), 1.0)));
}

#[test]
fn noclip_refreshes_a_spent_dash() {
    let mut dash = DashState {
        phase: crate::movement::DashPhase::Cooldown { remaining: 0.5 },
        ..Default::default()
    };
    let mut control = ControlOverride::Carry { velocity_x: 3.0 };
    let mut gravity = 2.0;

    let (noclip, dash_refreshed) = enter_noclip(&mut dash, &mut control, &mut gravity);
    assert!(dash_refreshed);
    assert!(dash.can_dash());
    assert_eq!(noclip.saved_gravity_scale, 2.0);
    assert_eq!(gravity, 0.0);
    assert_eq!(control, ControlOverride::None);
}

#[test]
fn noclip_mid_dash_keeps_pre_dash_gravity() {
    let mut dash = DashState {
        phase: crate::movement::DashPhase::Dashing {
            remaining: 0.1,
            direction: 1.0,
        },
        saved_gravity_scale: 1.5,
    };
    let mut control = ControlOverride::Dash { velocity_x: 10.0 };
    let mut gravity = 0.0;

    let (noclip, dash_refreshed) = enter_noclip(&mut dash, &mut control, &mut gravity);
    assert!(dash_refreshed);
    assert_eq!(noclip.saved_gravity_scale, 1.5);
}

#[test]
fn noclip_with_ready_dash_sends_nothing() {
    let mut dash = DashState::default();
    let mut control = ControlOverride::None;
    let mut gravity = 1.0;

    let (_, dash_refreshed) = enter_noclip(&mut dash, &mut control, &mut gravity);
    assert!(!dash_refreshed);
}
