use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// A textured quad identified by a texture-store key.
///
/// `offset` selects a frame when the texture is a sheet; `origin` is the
/// pivot in pixels from the top-left, used for placement. When the key has no
/// texture loaded, the render pass falls back to a flat shape in the entity's
/// tint color.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}

impl Sprite {
    /// A single-frame sprite with its pivot at the center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
