//! Color tint component.
//!
//! Modulates an entity's draw color. Collectibles pulse their alpha through
//! this component; parallax layers carry their theme color here for the
//! texture-missing fallback.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Draw color modulation. Replaces `Color::WHITE` in sprite draw calls.
#[derive(Component, Clone, Copy, Debug)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Tint {
            color: Color::new(r, g, b, a),
        }
    }

    pub fn from_color(color: Color) -> Self {
        Tint { color }
    }

    /// Replace only the alpha channel.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color.a = alpha;
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint {
            color: Color::WHITE,
        }
    }
}
