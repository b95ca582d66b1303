//! Driftrunner main entry point.
//!
//! The rendering and content layer of a 2D side-scrolling runner, written
//! in Rust using:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Five themed maps (Grassland, Desert, Volcano, Ice, Space) scroll past the
//! runner on parallax tile strips, decorated with procedural cacti, lava
//! embers, snowflakes, and stars. Collectible items grant temporary effects;
//! a level selection screen fronts it all.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (tile strips, particles, items, UI)
//! - [`events`] – Event types (input, collection, state transitions)
//! - [`game`] – High-level scene assembly
//! - [`resources`] – ECS resources (camera, catalog, config, stores)
//! - [`systems`] – ECS systems (scrolling, particles, effects, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize raylib window, ECS world, resources
//! 2. Enter the Setup state: load textures, open the level select screen
//! 3. Run the main loop:
//!    - Update input, camera, strips, particles, items, effects
//!    - Render world with the scroll offset applied
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::camera::ScrollCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, QuitRequested};
use crate::resources::input::InputState;
use crate::resources::levelcatalog::LevelCatalog;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_scroll_system;
use crate::systems::collectible::{
    collect_observer, collect_on_pass_system, collectible_float_system,
};
use crate::systems::effect::{effect_expired_observer, effect_timer_system};
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::levelselect::{
    back_action_observer, level_chosen_observer, level_select_observer,
};
use crate::systems::parallax::parallax_scroll_system;
use crate::systems::particlefield::particle_field_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Driftrunner
#[derive(Parser)]
#[command(version, about = "Driftrunner: parallax maps for a 2D side-scroller")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Jump straight into a level by id, skipping the selection screen.
    #[arg(long, value_name = "ID")]
    level: Option<String>,

    /// Print the level catalog and exit.
    #[arg(long)]
    list_levels: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let catalog = LevelCatalog::load_or_builtin("./assets/levels.json");

    // Early-exit: print the catalog and quit (no window needed)
    if cli.list_levels {
        for entry in &catalog.levels {
            println!(
                "{:<12} {:<20} {:?}{}",
                entry.id,
                entry.name,
                entry.theme,
                if entry.locked { " (locked)" } else { "" }
            );
        }
        return;
    }

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.level.is_some() {
        config.start_level = cli.level;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Driftrunner")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the back action, not the window
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(ScrollCamera::default().with_speed(config.scroll_speed));
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(catalog);
    world.insert_resource(config);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // Scene hooks run by the state observer.
    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // We must mark them as Persistent so they survive scene transitions.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world.entity_mut(setup_system_id.entity()).insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let enter_level_select_id = world.register_system(game::enter_level_select);
    world
        .entity_mut(enter_level_select_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_level_select", enter_level_select_id);

    let enter_play_system_id = world.register_system(game::enter_play);
    world
        .entity_mut(enter_play_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_play", enter_play_system_id);

    let clean_scene_system_id = world.register_system(game::clean_scene);
    world
        .entity_mut(clean_scene_system_id.entity())
        .insert(Persistent);
    systems_store.insert("clean_scene", clean_scene_system_id);

    let quit_game_system_id = world.register_system(game::quit_game);
    world
        .entity_mut(quit_game_system_id.entity())
        .insert(Persistent);
    systems_store.insert("quit_game", quit_game_system_id);

    world.insert_resource(systems_store);

    world.flush();

    // Set next GameState to Setup and apply it immediately
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});

    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(level_select_observer), Persistent));
    world.spawn((Observer::new(level_chosen_observer), Persistent));
    world.spawn((Observer::new(back_action_observer), Persistent));
    world.spawn((Observer::new(collect_observer), Persistent));
    world.spawn((Observer::new(effect_expired_observer), Persistent));
    // Ensure observers are registered before any system can trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        camera_scroll_system
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(parallax_scroll_system.after(camera_scroll_system));
    update.add_systems(particle_field_system);
    update.add_systems(collectible_float_system);
    update.add_systems(
        collect_on_pass_system
            .run_if(state_is_playing)
            .after(camera_scroll_system),
    );
    update.add_systems(effect_timer_system.after(collect_on_pass_system));
    update.add_systems(
        render_system
            .after(parallax_scroll_system)
            .after(particle_field_system)
            .after(collectible_float_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.contains_resource::<QuitRequested>()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
