//! Event and observer to toggle debug visualization.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the
//! [`DebugMode`](crate::resources::debugmode::DebugMode) resource.

use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Toggle the debug overlay. Carries no data; the observer switches the
/// presence of the resource.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        debug!("debug overlay off");
    } else {
        commands.insert_resource(DebugMode {});
        debug!("debug overlay on");
    }
}
