use bevy_ecs::prelude::Resource;

use crate::resources::theme::MapTheme;

/// The level currently being played, written by the level-chosen observer
/// before the transition into `Playing`.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel {
    pub id: String,
    pub theme: MapTheme,
}
