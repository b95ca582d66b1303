//! Collectible systems.
//!
//! - [`collectible_float_system`] – cosmetic sine bob and alpha pulse, pure
//!   functions of elapsed world time
//! - [`collect_on_pass_system`] – items are picked up when the runner line
//!   scrolls over them
//! - [`collect_observer`] – consumes a picked-up item and spawns its effect
//!   carrier

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::collectible::Collectible;
use crate::components::effect::ActiveEffect;
use crate::components::mapposition::MapPosition;
use crate::components::tint::Tint;
use crate::events::collect::CollectEvent;
use crate::resources::camera::ScrollCamera;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Minimum alpha of the pulse so items never fully vanish.
const PULSE_FLOOR: f32 = 140.0;

/// The runner sits at this fraction of the screen width.
const RUNNER_SCREEN_FRAC: f32 = 0.3;

/// Bob every collectible around its resting height and pulse its alpha.
///
/// Both motions are computed from `WorldTime::elapsed` and the item's phase,
/// so re-running the system for the same elapsed time is a no-op.
pub fn collectible_float_system(
    mut query: Query<(&Collectible, &mut MapPosition, &mut Tint)>,
    time: Res<WorldTime>,
) {
    for (item, mut position, mut tint) in query.iter_mut() {
        let bob = (time.elapsed * item.bob_frequency + item.phase).sin();
        position.pos.y = item.base_y + item.bob_amplitude * bob;

        let pulse = 0.5 + 0.5 * (time.elapsed * item.pulse_frequency + item.phase).sin();
        tint.set_alpha((PULSE_FLOOR + (255.0 - PULSE_FLOOR) * pulse) as u8);
    }
}

/// Pick up every item whose screen position has crossed the runner line.
///
/// The runner holds a fixed screen x while the world scrolls past, so an
/// item is collected the frame its screen position reaches that line.
pub fn collect_on_pass_system(
    query: Query<(Entity, &MapPosition), With<Collectible>>,
    camera: Res<ScrollCamera>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    let runner_x = screen.w as f32 * RUNNER_SCREEN_FRAC;
    for (entity, position) in query.iter() {
        if position.pos.x - camera.x <= runner_x {
            commands.trigger(CollectEvent { item: entity });
        }
    }
}

/// Consume a collectible: despawn it and spawn an [`ActiveEffect`] carrier
/// entity with the item's effect kind and duration.
pub fn collect_observer(
    trigger: On<CollectEvent>,
    query: Query<&Collectible>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(item) = query.get(event.item) else {
        // already consumed or despawned this frame
        return;
    };
    let kind = item.kind;
    info!("Collected {:?}", kind);
    commands.spawn(ActiveEffect::new(kind.effect(), kind.effect_duration()));
    commands.entity(event.item).try_despawn();
}
