use bevy_ecs::prelude::Component;

/// Marks an entity that survives scene teardown when switching between the
/// level selection screen and a map (observers, registered systems).
#[derive(Component, Clone, Debug)]
pub struct Persistent;
