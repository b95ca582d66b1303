//! Foreground ground strip component.
//!
//! The ground scrolls 1:1 with the camera, so two tile placements are not
//! enough to cover an arbitrarily wide viewport. A [`GroundStrip`] instead
//! yields every tile origin needed to span the viewport, derived in closed
//! form from the camera position. The render pass draws the ground texture
//! once per origin.

use bevy_ecs::prelude::Component;

use crate::components::tilestrip::StripError;

/// The 1:1 foreground layer of a map.
///
/// Unlike [`TileStrip`](crate::components::tilestrip::TileStrip) it keeps no
/// placement state; origins are recomputed from the camera every frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct GroundStrip {
    /// Tile width in pixels. Positive, fixed at construction.
    pub tile_width: f32,
    /// Tile height in pixels. Positive, fixed at construction.
    pub tile_height: f32,
}

impl GroundStrip {
    /// Create a ground strip from a tile's pixel dimensions.
    ///
    /// Returns [`StripError::InvalidDimension`] when either dimension is not
    /// positive.
    pub fn new(tile_width: i32, tile_height: i32) -> Result<Self, StripError> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(StripError::InvalidDimension {
                width: tile_width,
                height: tile_height,
            });
        }
        Ok(GroundStrip {
            tile_width: tile_width as f32,
            tile_height: tile_height as f32,
        })
    }

    /// Screen-space x origins of every ground tile needed to cover
    /// `[0, viewport_width)` at the given camera position.
    ///
    /// The first tile starts at or left of the viewport edge
    /// (`floor(camera / tile) * tile - camera`), and two tiles of padding
    /// keep the right edge covered for any fractional camera position. The
    /// iterator is finite and can be taken again for another pass over the
    /// same frame.
    pub fn visible_tile_origins(
        &self,
        camera_x: f32,
        viewport_width: f32,
    ) -> impl Iterator<Item = f32> + Clone + use<> {
        let tile_width = self.tile_width;
        let count = (viewport_width / tile_width).ceil().max(0.0) as i32 + 2;
        let start = (camera_x / tile_width).floor() * tile_width;
        (0..count).map(move |i| start + i as f32 * tile_width - camera_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        assert!(GroundStrip::new(0, 64).is_err());
        assert!(GroundStrip::new(-128, 64).is_err());
        assert!(GroundStrip::new(128, 0).is_err());
    }

    #[test]
    fn test_origin_count_covers_viewport_plus_pad() {
        let ground = GroundStrip::new(128, 64).unwrap();
        let origins: Vec<f32> = ground.visible_tile_origins(0.0, 640.0).collect();
        // 640 / 128 = 5 tiles across, plus two of padding
        assert_eq!(origins.len(), 7);
    }

    #[test]
    fn test_origins_are_spaced_one_tile_apart() {
        let ground = GroundStrip::new(128, 64).unwrap();
        let origins: Vec<f32> = ground.visible_tile_origins(1234.5, 640.0).collect();
        for pair in origins.windows(2) {
            assert!(approx_eq(pair[1] - pair[0], 128.0));
        }
    }

    #[test]
    fn test_first_origin_at_or_left_of_viewport_edge() {
        let ground = GroundStrip::new(128, 64).unwrap();
        for camera in [-5000.0, -37.2, 0.0, 63.9, 128.0, 9999.25] {
            let first = ground
                .visible_tile_origins(camera, 640.0)
                .next()
                .expect("at least one origin");
            assert!(first <= 0.0, "camera {camera}: first origin {first}");
            assert!(first > -128.0, "camera {camera}: first origin {first}");
        }
    }

    #[test]
    fn test_tiles_cover_the_whole_viewport() {
        let ground = GroundStrip::new(100, 50).unwrap();
        let viewport = 640.0;
        let mut camera = -3000.0_f32;
        while camera <= 3000.0 {
            let origins: Vec<f32> = ground.visible_tile_origins(camera, viewport).collect();
            assert!(origins.len() as f32 >= (viewport / 100.0).ceil() + 1.0);
            let first = origins[0];
            let last = *origins.last().unwrap();
            assert!(first <= 0.0, "camera {camera}");
            assert!(last + 100.0 >= viewport, "camera {camera}");
            camera += 77.7;
        }
    }

    #[test]
    fn test_iterator_is_restartable() {
        let ground = GroundStrip::new(128, 64).unwrap();
        let first: Vec<f32> = ground.visible_tile_origins(512.0, 640.0).collect();
        let second: Vec<f32> = ground.visible_tile_origins(512.0, 640.0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_camera_aligned_on_tile_boundary() {
        let ground = GroundStrip::new(128, 64).unwrap();
        let origins: Vec<f32> = ground.visible_tile_origins(256.0, 512.0).collect();
        assert!(approx_eq(origins[0], 0.0));
    }
}
