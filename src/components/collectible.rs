//! Collectible item component.
//!
//! Items float above the ground with a sine-wave bob and an alpha pulse,
//! both pure functions of elapsed world time (see
//! [`crate::systems::collectible::collectible_float_system`]). Collecting an
//! item despawns it and spawns the matching [`ActiveEffect`] carrier.

use bevy_ecs::prelude::Component;

use crate::components::effect::EffectKind;

/// The four item types maps can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    HealthHeart,
    DamageBoost,
    SpeedFlame,
    MagicPotion,
}

impl CollectibleKind {
    /// Texture key for the item sprite.
    pub fn texture_key(&self) -> &'static str {
        match self {
            CollectibleKind::HealthHeart => "item_heart",
            CollectibleKind::DamageBoost => "item_boost",
            CollectibleKind::SpeedFlame => "item_flame",
            CollectibleKind::MagicPotion => "item_potion",
        }
    }

    /// The effect granted on pickup.
    pub fn effect(&self) -> EffectKind {
        match self {
            CollectibleKind::HealthHeart => EffectKind::Heal,
            CollectibleKind::DamageBoost => EffectKind::DamageBoost,
            CollectibleKind::SpeedFlame => EffectKind::SpeedBoost,
            CollectibleKind::MagicPotion => EffectKind::Magic,
        }
    }

    /// How long the granted effect runs, in seconds.
    pub fn effect_duration(&self) -> f32 {
        match self {
            CollectibleKind::HealthHeart => 0.0,
            CollectibleKind::DamageBoost => 8.0,
            CollectibleKind::SpeedFlame => 5.0,
            CollectibleKind::MagicPotion => 10.0,
        }
    }
}

/// A floating item placed in a map.
#[derive(Component, Clone, Copy, Debug)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Resting height the bob oscillates around, in world pixels.
    pub base_y: f32,
    /// Bob height in pixels.
    pub bob_amplitude: f32,
    /// Bob speed in radians per second.
    pub bob_frequency: f32,
    /// Alpha pulse speed in radians per second.
    pub pulse_frequency: f32,
    /// Per-instance offset so items placed together don't bob in lockstep.
    pub phase: f32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, base_y: f32) -> Self {
        Collectible {
            kind,
            base_y,
            bob_amplitude: 6.0,
            bob_frequency: 2.0,
            pulse_frequency: 3.0,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}
