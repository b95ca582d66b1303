//! ECS systems, run each frame by the main schedule.
//!
//! Submodules overview:
//! - [`camera`] – advances the scroll camera, boosted by speed effects
//! - [`collectible`] – item bob/pulse, runner-line pickup, collect observer
//! - [`effect`] – temporary effect countdown and expiry
//! - [`gamestate`] – pending-transition check and state run conditions
//! - [`input`] – keyboard polling and input events
//! - [`levelselect`] – selection grid navigation and activation
//! - [`parallax`] – advances every tile strip to the camera position
//! - [`particlefield`] – ember/snowflake/star pool updates
//! - [`render`] – the frame draw pass
//! - [`time`] – world clock update

pub mod camera;
pub mod collectible;
pub mod effect;
pub mod gamestate;
pub mod input;
pub mod levelselect;
pub mod parallax;
pub mod particlefield;
pub mod render;
pub mod time;
