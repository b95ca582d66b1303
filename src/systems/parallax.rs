//! Parallax scroll system.
//!
//! Feeds the current camera position to every
//! [`TileStrip`](crate::components::tilestrip::TileStrip) so its two tile
//! placements follow the camera at the layer's scroll factor. Ground strips
//! need no per-frame update; their origins are derived from the camera at
//! render time.

use bevy_ecs::prelude::*;

use crate::components::tilestrip::TileStrip;
use crate::resources::camera::ScrollCamera;

/// Advance all parallax strips to the current camera position.
pub fn parallax_scroll_system(mut query: Query<&mut TileStrip>, camera: Res<ScrollCamera>) {
    for mut strip in query.iter_mut() {
        strip.advance(camera.x);
    }
}
