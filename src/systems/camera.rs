//! Camera scroll system.
//!
//! Moves the [`ScrollCamera`] forward at its base speed, doubled while a
//! speed-boost effect is active. Runs only in the `Playing` state.

use bevy_ecs::prelude::*;

use crate::components::effect::{ActiveEffect, EffectKind};
use crate::resources::camera::ScrollCamera;
use crate::resources::worldtime::WorldTime;

/// Speed multiplier applied while a `SpeedBoost` effect is live.
pub const SPEED_BOOST_FACTOR: f32 = 2.0;

/// Advance the camera by `speed * dt`, boosted when a flame item is active.
pub fn camera_scroll_system(
    mut camera: ResMut<ScrollCamera>,
    effects: Query<&ActiveEffect>,
    time: Res<WorldTime>,
) {
    let boosted = effects
        .iter()
        .any(|fx| fx.kind == EffectKind::SpeedBoost && fx.remaining > 0.0);
    let factor = if boosted { SPEED_BOOST_FACTOR } else { 1.0 };
    camera.x += camera.speed * factor * time.delta;
}
