use bevy_ecs::prelude::*;

/// A collectible entity was picked up. The observer in
/// `crate::systems::collectible` consumes the item and spawns its effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollectEvent {
    /// The collectible entity being consumed.
    pub item: Entity,
}
