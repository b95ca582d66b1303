//! Input action events.
//!
//! [`InputEvent`] is triggered when a logical input action occurs (press or
//! release). Observers such as the level selection controller subscribe to
//! these instead of reading the raw
//! [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Grid navigation: up (default: Up arrow).
    NavUp,
    /// Grid navigation: down (default: Down arrow).
    NavDown,
    /// Grid navigation: left (default: Left arrow).
    NavLeft,
    /// Grid navigation: right (default: Right arrow).
    NavRight,
    /// Confirm (default: Enter).
    Accept,
    /// Back/cancel (default: Escape).
    Back,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
