use bevy_ecs::prelude::*;

use crate::resources::theme::MapTheme;

/// An unlocked level was activated on the selection screen.
#[derive(Event, Debug, Clone)]
pub struct LevelChosenEvent {
    pub id: String,
    pub theme: MapTheme,
}
