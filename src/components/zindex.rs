use bevy_ecs::prelude::Component;

/// Draw-order key for the 2D painter's pass. Higher values draw on top;
/// parallax layers sit in the negatives, ground at -10, world entities at 0+.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
