//! Map themes and their layer stacks.
//!
//! Each [`MapTheme`] declares the parallax layers, ground, sky color, and
//! decoration set for one of the five maps. `game::build_map` turns these
//! specs into entities at scene setup.

use raylib::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::components::particlefield::FieldKind;

/// The five playable map themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTheme {
    Grassland,
    Desert,
    Volcano,
    Ice,
    Space,
}

/// One parallax layer of a theme, back to front.
#[derive(Debug, Clone, Copy)]
pub struct LayerSpec {
    /// Texture key looked up in the texture store.
    pub tex_key: &'static str,
    /// Fraction of camera movement the layer scrolls at.
    pub scroll_factor: f32,
    /// Top edge of the layer as a fraction of screen height.
    pub y_frac: f32,
    /// Layer height as a fraction of screen height.
    pub height_frac: f32,
    /// Flat color used when the texture is missing.
    pub tint: Color,
    /// Draw order; more negative is further back.
    pub z: i32,
}

/// Decorations a theme scatters over its map.
#[derive(Debug, Clone, Copy)]
pub enum DecorSpec {
    None,
    /// Seeded cacti along the ground.
    Cacti { count: usize },
    /// A particle field covering the screen.
    Particles { kind: FieldKind, count: usize },
}

impl MapTheme {
    pub const ALL: [MapTheme; 5] = [
        MapTheme::Grassland,
        MapTheme::Desert,
        MapTheme::Volcano,
        MapTheme::Ice,
        MapTheme::Space,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MapTheme::Grassland => "Grassland",
            MapTheme::Desert => "Desert",
            MapTheme::Volcano => "Volcano",
            MapTheme::Ice => "Ice",
            MapTheme::Space => "Space",
        }
    }

    /// Fill color behind all layers.
    pub fn sky_color(&self) -> Color {
        match self {
            MapTheme::Grassland => Color::new(110, 180, 235, 255),
            MapTheme::Desert => Color::new(240, 200, 130, 255),
            MapTheme::Volcano => Color::new(60, 25, 25, 255),
            MapTheme::Ice => Color::new(175, 210, 235, 255),
            MapTheme::Space => Color::new(8, 8, 24, 255),
        }
    }

    /// Parallax layers, back to front. Scroll factors rise toward the
    /// foreground; the 1:1 ground comes from [`MapTheme::ground`].
    pub fn layers(&self) -> [LayerSpec; 3] {
        let (far, mid, near) = match self {
            MapTheme::Grassland => (
                ("grass_sky", Color::new(150, 200, 245, 255)),
                ("grass_mountains", Color::new(110, 140, 110, 255)),
                ("grass_hills", Color::new(80, 160, 70, 255)),
            ),
            MapTheme::Desert => (
                ("desert_sky", Color::new(245, 215, 150, 255)),
                ("desert_mesas", Color::new(200, 140, 80, 255)),
                ("desert_dunes", Color::new(225, 180, 110, 255)),
            ),
            MapTheme::Volcano => (
                ("volcano_sky", Color::new(80, 30, 30, 255)),
                ("volcano_peaks", Color::new(120, 50, 35, 255)),
                ("volcano_rocks", Color::new(90, 40, 30, 255)),
            ),
            MapTheme::Ice => (
                ("ice_sky", Color::new(200, 225, 245, 255)),
                ("ice_glaciers", Color::new(160, 200, 230, 255)),
                ("ice_drifts", Color::new(220, 240, 250, 255)),
            ),
            MapTheme::Space => (
                ("space_void", Color::new(12, 12, 32, 255)),
                ("space_nebula", Color::new(40, 25, 70, 255)),
                ("space_asteroids", Color::new(70, 65, 80, 255)),
            ),
        };
        [
            LayerSpec {
                tex_key: far.0,
                scroll_factor: 0.1,
                y_frac: 0.0,
                height_frac: 0.55,
                tint: far.1,
                z: -40,
            },
            LayerSpec {
                tex_key: mid.0,
                scroll_factor: 0.3,
                y_frac: 0.30,
                height_frac: 0.40,
                tint: mid.1,
                z: -30,
            },
            LayerSpec {
                tex_key: near.0,
                scroll_factor: 0.6,
                y_frac: 0.55,
                height_frac: 0.30,
                tint: near.1,
                z: -20,
            },
        ]
    }

    /// The 1:1 foreground ground layer.
    pub fn ground(&self) -> LayerSpec {
        let (tex_key, tint) = match self {
            MapTheme::Grassland => ("grass_ground", Color::new(60, 120, 50, 255)),
            MapTheme::Desert => ("desert_ground", Color::new(210, 170, 100, 255)),
            MapTheme::Volcano => ("volcano_ground", Color::new(50, 30, 25, 255)),
            MapTheme::Ice => ("ice_ground", Color::new(235, 245, 250, 255)),
            MapTheme::Space => ("space_ground", Color::new(55, 55, 65, 255)),
        };
        LayerSpec {
            tex_key,
            scroll_factor: 1.0,
            y_frac: 0.85,
            height_frac: 0.15,
            tint,
            z: -10,
        }
    }

    /// Theme decoration set.
    pub fn decorations(&self) -> DecorSpec {
        match self {
            MapTheme::Grassland => DecorSpec::None,
            MapTheme::Desert => DecorSpec::Cacti { count: 7 },
            MapTheme::Volcano => DecorSpec::Particles {
                kind: FieldKind::Embers,
                count: 96,
            },
            MapTheme::Ice => DecorSpec::Particles {
                kind: FieldKind::Snowflakes,
                count: 160,
            },
            MapTheme::Space => DecorSpec::Particles {
                kind: FieldKind::Stars,
                count: 120,
            },
        }
    }
}
