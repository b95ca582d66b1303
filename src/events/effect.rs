use bevy_ecs::prelude::*;

use crate::components::effect::EffectKind;

/// A temporary effect ran out and its carrier entity is being despawned.
#[derive(Event, Debug, Clone, Copy)]
pub struct EffectExpiredEvent {
    pub kind: EffectKind,
}
