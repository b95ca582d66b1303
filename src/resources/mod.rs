//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`camera`] – horizontal scroll camera
//! - [`currentlevel`] – the level entry being played
//! - [`debugmode`] – marker enabling the debug overlay
//! - [`gameconfig`] – INI-backed settings
//! - [`gamestate`] – current/pending high-level state
//! - [`input`] – per-frame keyboard snapshot
//! - [`levelcatalog`] – static level lineup for the selection screen
//! - [`screensize`] – framebuffer dimensions
//! - [`systemsstore`] – registry of named one-shot systems
//! - [`texturestore`] – loaded texture registry (non-send)
//! - [`theme`] – map themes and layer stacks
//! - [`worldtime`] – frame clock

pub mod camera;
pub mod currentlevel;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod levelcatalog;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod theme;
pub mod worldtime;
