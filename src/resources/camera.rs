use bevy_ecs::prelude::Resource;

/// Horizontal scroll camera.
///
/// `x` is the world-space offset of the viewport's left edge; every frame the
/// parallax system feeds it to the tile strips and the render pass subtracts
/// it from world entity positions.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScrollCamera {
    /// Camera position in world pixels.
    pub x: f32,
    /// Base scroll speed in pixels per second.
    pub speed: f32,
}

impl Default for ScrollCamera {
    fn default() -> Self {
        ScrollCamera {
            x: 0.0,
            speed: 120.0,
        }
    }
}

impl ScrollCamera {
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}
