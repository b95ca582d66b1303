//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Arrow keys navigate the level
//! selection grid; Enter confirms, Escape backs out.

use bevy_ecs::prelude::Resource;
use raylib::prelude::KeyboardKey;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        BoolState {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // Grid navigation (arrow keys)
    pub nav_up: BoolState,
    pub nav_down: BoolState,
    pub nav_left: BoolState,
    pub nav_right: BoolState,
    // Confirm / cancel
    pub accept: BoolState,
    pub back: BoolState,
    // Diagnostics
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            nav_up: BoolState::bound(KeyboardKey::KEY_UP),
            nav_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            nav_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            nav_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            accept: BoolState::bound(KeyboardKey::KEY_ENTER),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}
