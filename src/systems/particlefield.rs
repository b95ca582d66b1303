//! Particle field update system.
//!
//! Advances every [`ParticleField`] pool each frame. Records integrate their
//! velocity, sway or drift according to the field kind, and are reset in
//! place when they leave the field bounds. The pool length never changes, so
//! the per-frame cost is a flat pass over the records with no allocation.

use bevy_ecs::prelude::*;

use crate::components::particlefield::{FieldKind, ParticleField, spawn_record};
use crate::resources::worldtime::WorldTime;

/// Horizontal sway speed for snowflakes, in pixels per second.
const SNOW_SWAY: f32 = 18.0;

/// Advance all particle pools by the scaled frame delta.
///
/// Records that exit the bounds re-roll at the opposite edge: embers restart
/// at the bottom, snowflakes at the top. Stars never move; their twinkle is
/// computed from elapsed time at render.
pub fn particle_field_system(mut query: Query<&mut ParticleField>, time: Res<WorldTime>) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }

    for mut field in query.iter_mut() {
        let field = &mut *field;
        let bounds = field.bounds;
        let kind = field.kind;
        let elapsed = time.elapsed;
        for p in field.particles.iter_mut() {
            match kind {
                FieldKind::Embers => {
                    p.pos.x += p.vel.x * dt;
                    p.pos.y += p.vel.y * dt;
                    if p.pos.y + p.radius < 0.0 {
                        let x = field.rng.f32() * bounds.x;
                        *p = spawn_record(kind, x, bounds.y, &mut field.rng);
                    }
                }
                FieldKind::Snowflakes => {
                    p.pos.y += p.vel.y * dt;
                    p.pos.x += (elapsed * 1.3 + p.phase).sin() * SNOW_SWAY * dt;
                    if p.pos.y - p.radius > bounds.y {
                        let x = field.rng.f32() * bounds.x;
                        *p = spawn_record(kind, x, 0.0, &mut field.rng);
                    }
                }
                FieldKind::Stars => {}
            }
            // keep drifting records on the field horizontally
            if p.pos.x < 0.0 {
                p.pos.x += bounds.x;
            } else if p.pos.x > bounds.x {
                p.pos.x -= bounds.x;
            }
        }
    }
}
