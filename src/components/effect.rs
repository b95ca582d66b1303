//! Temporary effect timer component.
//!
//! An [`ActiveEffect`] entity represents a picked-up item's effect counting
//! down. [`crate::systems::effect::effect_timer_system`] decrements it each
//! frame and despawns the carrier when it expires, triggering
//! [`EffectExpiredEvent`](crate::events::effect::EffectExpiredEvent).

use bevy_ecs::prelude::Component;

/// What an active effect does while it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Restores health. Instantaneous; expires on its first tick.
    Heal,
    /// Boosts damage dealt while active.
    DamageBoost,
    /// Doubles the camera scroll speed while active.
    SpeedBoost,
    /// Magic shield while active.
    Magic,
}

/// Countdown for a temporary effect.
#[derive(Component, Clone, Copy, Debug)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    /// Full duration in seconds, kept for HUD display.
    pub duration: f32,
    /// Remaining time in seconds.
    pub remaining: f32,
}

impl ActiveEffect {
    /// Create an effect that runs for `seconds`.
    pub fn new(kind: EffectKind, seconds: f32) -> Self {
        ActiveEffect {
            kind,
            duration: seconds,
            remaining: seconds,
        }
    }

    /// Remaining fraction in `[0, 1]` for HUD bars. Zero-duration effects
    /// report 0.
    pub fn fraction_remaining(&self) -> f32 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.remaining / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_starts_full() {
        let fx = ActiveEffect::new(EffectKind::SpeedBoost, 5.0);
        assert!(approx_eq(fx.remaining, 5.0));
        assert!(approx_eq(fx.fraction_remaining(), 1.0));
    }

    #[test]
    fn test_fraction_tracks_remaining() {
        let mut fx = ActiveEffect::new(EffectKind::Magic, 10.0);
        fx.remaining = 2.5;
        assert!(approx_eq(fx.fraction_remaining(), 0.25));
    }

    #[test]
    fn test_fraction_clamps_below_zero() {
        let mut fx = ActiveEffect::new(EffectKind::DamageBoost, 8.0);
        fx.remaining = -1.0;
        assert!(approx_eq(fx.fraction_remaining(), 0.0));
    }

    #[test]
    fn test_zero_duration_reports_empty() {
        let fx = ActiveEffect::new(EffectKind::Heal, 0.0);
        assert!(approx_eq(fx.fraction_remaining(), 0.0));
    }
}
