//! Parallax tile strip component.
//!
//! A [`TileStrip`] keeps two copies of one horizontally-tiling image placed so
//! that their union always covers the visible viewport, scrolling at a
//! layer-specific fraction of camera speed. Every background layer of a map
//! owns one strip; the 1:1 foreground uses
//! [`GroundStrip`](crate::components::groundstrip::GroundStrip) instead.
//!
//! # How It Works
//!
//! 1. A layer entity is spawned with a `TileStrip` sized from its texture
//! 2. `parallax_scroll_system` calls [`TileStrip::advance`] each frame with
//!    the current camera x
//! 3. The render pass draws the layer texture at both
//!    [`TileStrip::tile_positions`]
//!
//! `advance` recomputes both placements from the camera value alone. Calling
//! it twice with the same camera yields the same positions; there is no
//! hidden per-frame state.
//!
//! # Related
//!
//! - [`crate::components::groundstrip::GroundStrip`] – multi-tile foreground variant
//! - [`crate::systems::parallax::parallax_scroll_system`] – per-frame driver

use bevy_ecs::prelude::Component;
use thiserror::Error;

/// Construction-time validation failure for tile strips.
///
/// Tile dimensions come from a decoded image, so a non-positive value means
/// the caller handed us a texture that never loaded. Rejecting it here keeps
/// every later division and modulo by `tile_width` safe.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    #[error("tile dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
}

/// One horizontally-tiling parallax layer.
///
/// Holds the fixed tile size, the layer's scroll factor, and the two current
/// tile placements. Placements are screen-space x offsets of the tile's left
/// edge.
#[derive(Component, Clone, Copy, Debug)]
pub struct TileStrip {
    /// Tile width in pixels. Positive, fixed at construction.
    pub tile_width: f32,
    /// Tile height in pixels. Positive, fixed at construction.
    pub tile_height: f32,
    /// Fraction of camera movement this layer scrolls at. 0.0–1.0 for
    /// background layers; the foreground ground uses 1.0.
    pub scroll_factor: f32,
    position_a: f32,
    position_b: f32,
}

impl TileStrip {
    /// Create a strip from a tile's pixel dimensions and a scroll factor.
    ///
    /// Placements start at `(0, tile_width)`. Returns
    /// [`StripError::InvalidDimension`] when either dimension is not
    /// positive.
    pub fn new(tile_width: i32, tile_height: i32, scroll_factor: f32) -> Result<Self, StripError> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(StripError::InvalidDimension {
                width: tile_width,
                height: tile_height,
            });
        }
        Ok(TileStrip {
            tile_width: tile_width as f32,
            tile_height: tile_height as f32,
            scroll_factor,
            position_a: 0.0,
            position_b: tile_width as f32,
        })
    }

    /// Recompute both tile placements for the given camera x.
    ///
    /// The raw placements are `-camera_x * scroll_factor` and one tile width
    /// to its right. Any placement that has scrolled a full tile past the
    /// left viewport edge is wrapped forward by a whole number of
    /// two-tile-width periods, then the pair is ordered left-to-right.
    ///
    /// Total over all finite camera values; cameras far beyond f32 precision
    /// accumulate float error, which is accepted.
    pub fn advance(&mut self, camera_x: f32) {
        let offset = camera_x * self.scroll_factor;
        let a = wrap_forward(-offset, self.tile_width);
        let b = wrap_forward(-offset + self.tile_width, self.tile_width);
        // order left-to-right, then re-derive the right placement so the two
        // stay exactly one tile width apart under float rounding
        self.position_a = a.min(b);
        self.position_b = self.position_a + self.tile_width;
    }

    /// The two current tile placements, left one first.
    pub fn tile_positions(&self) -> (f32, f32) {
        (self.position_a, self.position_b)
    }
}

/// Wrap a placement forward while it sits a full tile left of the viewport.
///
/// Closed-form equivalent of `while pos + width < 0 { pos += 2.0 * width }`,
/// so the correction stays O(1) however far the camera has travelled.
fn wrap_forward(pos: f32, width: f32) -> f32 {
    if pos + width < 0.0 {
        let period = 2.0 * width;
        pos + period * (-(pos + width) / period).ceil()
    } else {
        pos
    }
}
