//! Bounded particle pools for map decoration.
//!
//! A [`ParticleField`] owns a fixed-capacity pool of particle records that
//! decorate a map theme: rising lava embers, falling snowflakes, or twinkling
//! stars. Records are reused in place when they leave the field bounds, so a
//! field never allocates after construction.
//!
//! # How It Works
//!
//! 1. A field is spawned at map build with a kind, bounds, and a seed
//! 2. [`crate::systems::particlefield::particle_field_system`] advances every
//!    record each frame and resets the ones that left the bounds
//! 3. The render pass draws each record procedurally (no textures)
//!
//! All motion phase derives from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and the per-record `phase`, never from a wall clock, so two runs with the
//! same seed and frame deltas produce identical fields.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::Vector2;

/// Upper bound on live records per field.
pub const FIELD_CAPACITY: usize = 256;

/// What a field's records represent and how they move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Volcano: drift upward, reset at the top edge.
    Embers,
    /// Ice: fall with a sinusoidal horizontal sway, reset at the bottom edge.
    Snowflakes,
    /// Space: hold position, twinkle via an alpha sine at render time.
    Stars,
}

/// One pooled particle record.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position inside the field bounds, in pixels.
    pub pos: Vector2,
    /// Velocity in pixels per second.
    pub vel: Vector2,
    /// Draw radius in pixels.
    pub radius: f32,
    /// Per-record phase offset for sway/twinkle sines, in radians.
    pub phase: f32,
}

/// Fixed-capacity decorative particle pool.
#[derive(Component, Debug)]
pub struct ParticleField {
    /// Movement and rendering profile.
    pub kind: FieldKind,
    /// Width/height of the region records live in, in pixels.
    pub bounds: Vector2,
    /// The pooled records. Length is fixed after construction.
    pub particles: ArrayVec<Particle, FIELD_CAPACITY>,
    /// RNG used to respawn records that leave the bounds.
    pub rng: Rng,
}

impl ParticleField {
    /// Build a field with `count` records (clamped to [`FIELD_CAPACITY`])
    /// scattered uniformly over `bounds` by a seeded RNG.
    pub fn new(kind: FieldKind, count: usize, bounds: Vector2, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let mut particles = ArrayVec::new();
        for _ in 0..count.min(FIELD_CAPACITY) {
            let x = rng.f32() * bounds.x;
            let y = rng.f32() * bounds.y;
            particles.push(spawn_record(kind, x, y, &mut rng));
        }
        ParticleField {
            kind,
            bounds,
            particles,
            rng,
        }
    }
}

/// Roll a fresh record at the given position.
pub(crate) fn spawn_record(kind: FieldKind, x: f32, y: f32, rng: &mut Rng) -> Particle {
    let phase = rng.f32() * std::f32::consts::TAU;
    match kind {
        FieldKind::Embers => Particle {
            pos: Vector2 { x, y },
            vel: Vector2 {
                x: -10.0 + rng.f32() * 20.0,
                y: -(20.0 + rng.f32() * 40.0),
            },
            radius: 1.0 + rng.f32() * 2.0,
            phase,
        },
        FieldKind::Snowflakes => Particle {
            pos: Vector2 { x, y },
            vel: Vector2 {
                x: 0.0,
                y: 15.0 + rng.f32() * 25.0,
            },
            radius: 1.0 + rng.f32() * 1.5,
            phase,
        },
        FieldKind::Stars => Particle {
            pos: Vector2 { x, y },
            vel: Vector2 { x: 0.0, y: 0.0 },
            radius: 0.5 + rng.f32() * 1.0,
            phase,
        },
    }
}
