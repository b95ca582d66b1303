//! Screen size resource.
//!
//! Current framebuffer dimensions in pixels, refreshed each frame from the
//! window. Layer heights and the ground tile span derive from this.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
