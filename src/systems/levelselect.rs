//! Level selection systems.
//!
//! - [`level_select_observer`] – moves the grid highlight on navigation input
//!   and activates the highlighted level on accept
//! - [`level_chosen_observer`] – records the chosen level and requests the
//!   transition into `Playing`
//! - [`back_action_observer`] – Escape backs out of a map to the selection
//!   screen, and out of the selection screen to quit

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::levelselect::LevelSelect;
use crate::events::input::{InputAction, InputEvent};
use crate::events::levelselect::LevelChosenEvent;
use crate::resources::currentlevel::CurrentLevel;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};

/// Handle navigation and activation on the selection screen.
///
/// Locked slots can be highlighted but not activated; activation of an
/// unlocked slot triggers [`LevelChosenEvent`].
pub fn level_select_observer(
    trigger: On<InputEvent>,
    mut query: Query<&mut LevelSelect>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if !event.pressed {
        return; // only key presses navigate
    }
    for mut screen in query.iter_mut() {
        match event.action {
            InputAction::NavUp => screen.move_selection(0, -1),
            InputAction::NavDown => screen.move_selection(0, 1),
            InputAction::NavLeft => screen.move_selection(-1, 0),
            InputAction::NavRight => screen.move_selection(1, 0),
            InputAction::Accept => {
                let slot = screen.selected();
                if slot.locked {
                    info!("{} is locked", slot.name);
                } else {
                    commands.trigger(LevelChosenEvent {
                        id: slot.id.clone(),
                        theme: slot.theme,
                    });
                }
            }
            InputAction::Back => {}
        }
    }
}

/// Record the chosen level and request the `Playing` state.
pub fn level_chosen_observer(
    trigger: On<LevelChosenEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    info!("Level chosen: {}", event.id);
    commands.insert_resource(CurrentLevel {
        id: event.id.clone(),
        theme: event.theme,
    });
    next_state.set(GameStates::Playing);
}

/// Escape: leave the map for the selection screen, or quit from there.
pub fn back_action_observer(
    trigger: On<InputEvent>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if event.action != InputAction::Back || !event.pressed {
        return;
    }
    match state.get() {
        GameStates::Playing => next_state.set(GameStates::LevelSelect),
        GameStates::LevelSelect => next_state.set(GameStates::Quitting),
        _ => {}
    }
}
