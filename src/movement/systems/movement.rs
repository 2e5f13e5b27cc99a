//! Movement domain: fixed-step controllers for jump, dash, and momentum.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{Abilities, Ability};
use crate::movement::dash::{
    ControlledBody, DashTransition, cancel_dash, finish_dash, start_dash,
};
use crate::movement::jump::launch;
use crate::movement::{
    ControlOverride, ControlsFrozen, DashEndedEvent, DashReadyEvent, DashStartedEvent, DashState,
    DashTuning, JumpState, JumpTuning, JumpedEvent, MotionState, MovementInput, MovementTuning,
    Player, Senses,
};

fn has_ability(abilities: &Option<Res<Abilities>>, ability: Ability) -> bool {
    abilities.as_ref().is_some_and(|a| a.has(ability))
}

pub(crate) fn update_ground_contact(
    mut query: Query<(&Senses, &mut JumpState), (With<Player>, Without<ControlsFrozen>)>,
) {
    for (senses, mut jump) in &mut query {
        jump.on_ground_contact(senses);
    }
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<JumpTuning>,
    dash_tuning: Res<DashTuning>,
    abilities: Option<Res<Abilities>>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut dash_ended_events: MessageWriter<DashEndedEvent>,
    mut query: Query<
        (
            Entity,
            &Senses,
            &mut JumpState,
            &mut DashState,
            &mut MotionState,
            &mut ControlOverride,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        (With<Player>, Without<ControlsFrozen>),
    >,
) {
    let command = input.command();
    let now = time.elapsed_secs();
    let double_unlocked = has_ability(&abilities, Ability::DoubleJump);

    for (entity, senses, mut jump, mut dash, mut motion, mut control, mut velocity, mut gravity) in
        &mut query
    {
        let Some(kind) = jump.try_jump(&command, senses.grounded, double_unlocked, now, &tuning)
        else {
            continue;
        };

        let mut body = ControlledBody {
            control: &mut *control,
            motion: &mut *motion,
            velocity: &mut velocity.0,
            gravity_scale: &mut gravity.0,
        };

        // Jump wins over a running dash and must never leave gravity off
        if cancel_dash(&mut dash, &mut body, &dash_tuning) {
            dash_ended_events.write(DashEndedEvent { entity });
        }
        launch(body.motion, body.velocity, &tuning);

        jumped_events.write(JumpedEvent { entity, kind });
        debug!(
            "Jump: kind={:?}, max_hold={}, can_double_jump={}",
            kind, jump.current_max_hold_time, jump.can_double_jump
        );
    }
}

pub(crate) fn apply_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    abilities: Option<Res<Abilities>>,
    mut started_events: MessageWriter<DashStartedEvent>,
    mut ended_events: MessageWriter<DashEndedEvent>,
    mut ready_events: MessageWriter<DashReadyEvent>,
    mut query: Query<
        (
            Entity,
            &mut DashState,
            &mut JumpState,
            &mut MotionState,
            &mut ControlOverride,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        (With<Player>, Without<ControlsFrozen>),
    >,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let command = input.command();
    let unlocked = has_ability(&abilities, Ability::Dash);

    for (entity, mut dash, mut jump, mut motion, mut control, mut velocity, mut gravity) in
        &mut query
    {
        let mut body = ControlledBody {
            control: &mut *control,
            motion: &mut *motion,
            velocity: &mut velocity.0,
            gravity_scale: &mut gravity.0,
        };

        match dash.tick(dt, &tuning) {
            DashTransition::Ended => {
                finish_dash(&dash, &mut body, &tuning);
                ended_events.write(DashEndedEvent { entity });
                debug!("Dash ended: carry_vx={}", body.motion.momentum.x);
            }
            DashTransition::Ready => {
                ready_events.write(DashReadyEvent { entity });
            }
            DashTransition::None => {}
        }

        let Some(dash_vx) = start_dash(&mut dash, &mut body, &command, unlocked, &tuning) else {
            continue;
        };
        jump.notify_dash_started(now);

        started_events.write(DashStartedEvent {
            entity,
            direction: dash_vx.signum(),
        });
        debug!("Dash started: vx={}", dash_vx);
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&Senses, &DashState, &ControlOverride, &mut MotionState, &mut LinearVelocity),
        (With<Player>, Without<ControlsFrozen>),
    >,
) {
    let dt = time.delta_secs();
    let command = input.command();

    for (senses, dash, control, mut motion, mut velocity) in &mut query {
        if !dash.is_dashing() {
            motion.update_facing(command.move_axis);
        }

        let vx = motion.integrate(
            dt,
            command.move_axis,
            senses,
            velocity.x,
            *control,
            &tuning,
        );
        velocity.x = vx;
    }
}

pub(crate) fn apply_jump_hold(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<JumpTuning>,
    mut query: Query<
        (&mut JumpState, &MotionState, &mut LinearVelocity),
        (With<Player>, Without<ControlsFrozen>),
    >,
) {
    let dt = time.delta_secs();
    let command = input.command();

    for (mut jump, motion, mut velocity) in &mut query {
        let boost = jump.tick_hold(dt, &command, &tuning);
        if boost > 0.0 {
            let vy = velocity.y + boost;
            motion.set_vertical_velocity(&mut velocity.0, vy);
        }
    }
}

pub(crate) fn tick_control_override(
    time: Res<Time>,
    mut query: Query<&mut ControlOverride, With<Player>>,
) {
    let dt = time.delta_secs();

    // Also releases the one-tick carry pin set when a dash ends
    for mut control in &mut query {
        if control.tick(dt) {
            debug!("Bounce window closed, speed clamp restored");
        }
    }
}
