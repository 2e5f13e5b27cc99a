//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputBindings, MovementInput};

fn any_pressed(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.pressed(*key))
}

fn any_just_pressed(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.just_pressed(*key))
}

fn any_just_released(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.just_released(*key))
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if any_pressed(&keyboard, &bindings.move_left) {
        x -= 1.0;
    }
    if any_pressed(&keyboard, &bindings.move_right) {
        x += 1.0;
    }

    input.axis = x;
    input.jump_held = any_pressed(&keyboard, &bindings.jump);
    input.wall_pass_held = any_pressed(&keyboard, &bindings.wall_pass);

    // Edges stay latched until the fixed step has consumed them
    input.jump_just_pressed |= any_just_pressed(&keyboard, &bindings.jump);
    input.jump_just_released |= any_just_released(&keyboard, &bindings.jump);
    input.dash_just_pressed |= any_just_pressed(&keyboard, &bindings.dash);
    input.interact_just_pressed |= any_just_pressed(&keyboard, &bindings.interact);
}

pub(crate) fn clear_input_edges(mut input: ResMut<MovementInput>) {
    input.clear_edges();
}
