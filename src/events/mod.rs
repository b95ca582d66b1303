//! Event types and their observers.
//!
//! Submodules overview:
//! - [`collect`] – a collectible was picked up
//! - [`effect`] – a temporary effect ran out
//! - [`gamestate`] – pending state transition should be applied
//! - [`input`] – logical input actions (press/release)
//! - [`levelselect`] – a level was chosen on the selection screen
//! - [`switchdebug`] – toggle the debug overlay

pub mod collect;
pub mod effect;
pub mod gamestate;
pub mod input;
pub mod levelselect;
pub mod switchdebug;
