//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: the parallax strips behind every map, the decorative
//! content scattered over them, items, and UI screens.
//!
//! Submodules overview:
//! - [`collectible`] – floating item sprites (heart, boost, flame, potion)
//! - [`decoration`] – static procedural decorations (cacti)
//! - [`effect`] – countdown for temporary item effects
//! - [`groundstrip`] – multi-tile 1:1 foreground strip
//! - [`levelselect`] – level selection screen and its slot grid
//! - [`mapposition`] – world-space position for an entity
//! - [`particlefield`] – bounded pools of embers/snowflakes/stars
//! - [`persistent`] – marker for entities that survive scene changes
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – textured quad with a store key
//! - [`tilestrip`] – two-tile parallax background strip
//! - [`tint`] – draw color modulation
//! - [`zindex`] – draw ordering hint

pub mod collectible;
pub mod decoration;
pub mod effect;
pub mod groundstrip;
pub mod levelselect;
pub mod mapposition;
pub mod particlefield;
pub mod persistent;
pub mod screenposition;
pub mod sprite;
pub mod tilestrip;
pub mod tint;
pub mod zindex;
