//! Temporary effect timer system.
//!
//! Each frame:
//!
//! 1. [`effect_timer_system`] decrements `remaining` on every
//!    [`ActiveEffect`] by the scaled delta
//! 2. When `remaining <= 0`, the carrier entity is despawned and an
//!    [`EffectExpiredEvent`] is triggered
//!
//! Instantaneous effects (duration 0) expire on their first tick.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::effect::ActiveEffect;
use crate::events::effect::EffectExpiredEvent;
use crate::resources::worldtime::WorldTime;

/// Count active effects down and retire the expired ones.
pub fn effect_timer_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut ActiveEffect)>,
    mut commands: Commands,
) {
    let dt = time.delta; // delta is already scaled
    for (entity, mut fx) in query.iter_mut() {
        fx.remaining -= dt;
        if fx.remaining <= 0.0 {
            commands.trigger(EffectExpiredEvent { kind: fx.kind });
            commands.entity(entity).try_despawn();
        }
    }
}

/// Log expirations; gameplay consequences of an effect ending live in the
/// systems that read the effect while it runs.
pub fn effect_expired_observer(trigger: On<EffectExpiredEvent>) {
    debug!("Effect expired: {:?}", trigger.event().kind);
}
