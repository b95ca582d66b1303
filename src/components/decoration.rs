//! Static map decorations drawn procedurally.

use bevy_ecs::prelude::Component;

/// A desert cactus: a trunk with two arms, drawn as rectangles by the render
/// pass. Placed along the ground at map build with seeded random heights.
#[derive(Component, Clone, Copy, Debug)]
pub struct Cactus {
    /// Trunk height in pixels.
    pub height: f32,
    /// Mirror the arms horizontally.
    pub flip: bool,
}

impl Cactus {
    pub fn new(height: f32, flip: bool) -> Self {
        Cactus { height, flip }
    }

    /// Trunk width, proportional to height.
    pub fn trunk_width(&self) -> f32 {
        (self.height * 0.22).max(4.0)
    }
}
