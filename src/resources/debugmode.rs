//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay (FPS, entity
//! count, camera position). Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws diagnostics.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
