//! Input systems.
//!
//! [`update_input_state`] polls Raylib once per frame, refreshes the
//! [`InputState`](crate::resources::input::InputState) resource, and triggers
//! [`InputEvent`]s for the logical actions that changed. The debug toggle
//! emits [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! directly.

use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let refresh = |state: &mut BoolState, rl: &raylib::RaylibHandle| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    };

    refresh(&mut input.nav_up, &rl);
    refresh(&mut input.nav_down, &rl);
    refresh(&mut input.nav_left, &rl);
    refresh(&mut input.nav_right, &rl);
    refresh(&mut input.accept, &rl);
    refresh(&mut input.back, &rl);
    refresh(&mut input.mode_debug, &rl);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    for (state, action) in [
        (&input.nav_up, InputAction::NavUp),
        (&input.nav_down, InputAction::NavDown),
        (&input.nav_left, InputAction::NavLeft),
        (&input.nav_right, InputAction::NavRight),
        (&input.accept, InputAction::Accept),
        (&input.back, InputAction::Back),
    ] {
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}
