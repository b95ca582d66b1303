use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position in pixels, unaffected by the scroll camera. Used for
/// UI elements such as the level selection screen and the HUD.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        ScreenPosition {
            pos: Vector2 { x, y },
        }
    }
}
