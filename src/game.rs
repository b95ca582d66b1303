//! High-level scene assembly.
//!
//! The state observer runs these as one-shot systems on state transitions:
//!
//! - [`setup`] – loads textures once, then opens the level select screen (or
//!   jumps straight into a configured start level)
//! - [`enter_level_select`] – spawns the selection grid from the catalog
//! - [`enter_play`] – resets the camera and builds the chosen map
//! - [`clean_scene`] – despawns everything that isn't [`Persistent`]
//! - [`quit_game`] – signals the main loop to exit

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use raylib::prelude::Vector2;

use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::decoration::Cactus;
use crate::components::groundstrip::GroundStrip;
use crate::components::levelselect::LevelSelect;
use crate::components::mapposition::MapPosition;
use crate::components::particlefield::ParticleField;
use crate::components::persistent::Persistent;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tilestrip::TileStrip;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera::ScrollCamera;
use crate::resources::currentlevel::CurrentLevel;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState, QuitRequested};
use crate::resources::levelcatalog::LevelCatalog;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::theme::{DecorSpec, LayerSpec, MapTheme};

/// World-space x where the first collectible of a map appears.
const FIRST_ITEM_X: f32 = 900.0;
/// Horizontal spacing between consecutive collectibles.
const ITEM_SPACING: f32 = 650.0;
/// Collectibles placed per map.
const ITEM_COUNT: usize = 8;

/// One-shot startup: load textures, pick the first scene.
pub fn setup(
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
    config: Res<GameConfig>,
    catalog: Res<LevelCatalog>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
) {
    load_textures(&mut rl, &th, &mut textures);

    if let Some(id) = &config.start_level {
        if let Some(entry) = catalog.get(id) {
            info!("Starting directly in level '{}'", entry.id);
            commands.insert_resource(CurrentLevel {
                id: entry.id.clone(),
                theme: entry.theme,
            });
            next_state.set(GameStates::Playing);
            return;
        }
        warn!("Unknown start level '{}', opening level select", id);
    }
    next_state.set(GameStates::LevelSelect);
}

/// Try to load every texture the maps and items reference. Missing files are
/// fine; strips and sprites fall back to flat shapes in their tint color.
fn load_textures(
    rl: &mut raylib::RaylibHandle,
    th: &raylib::RaylibThread,
    textures: &mut TextureStore,
) {
    let mut keys: Vec<&'static str> = vec![
        CollectibleKind::HealthHeart.texture_key(),
        CollectibleKind::DamageBoost.texture_key(),
        CollectibleKind::SpeedFlame.texture_key(),
        CollectibleKind::MagicPotion.texture_key(),
    ];
    for theme in MapTheme::ALL {
        for layer in theme.layers() {
            keys.push(layer.tex_key);
        }
        keys.push(theme.ground().tex_key);
    }

    let mut loaded = 0usize;
    let mut missing = 0usize;
    for key in keys {
        let path = format!("./assets/textures/{}.png", key);
        match rl.load_texture(th, &path) {
            Ok(tex) => {
                textures.insert(key, tex);
                loaded += 1;
            }
            Err(_) => missing += 1,
        }
    }
    info!("Textures: {} loaded, {} missing (flat-color fallback)", loaded, missing);
}

/// Spawn the level selection grid.
pub fn enter_level_select(
    mut commands: Commands,
    catalog: Res<LevelCatalog>,
    mut camera: ResMut<ScrollCamera>,
) {
    camera.x = 0.0;
    commands.spawn(LevelSelect::new(
        &catalog,
        Vector2 { x: 40.0, y: 60.0 },
        3,
        Vector2 { x: 160.0, y: 90.0 },
        Vector2 { x: 180.0, y: 110.0 },
    ));
}

/// Reset the camera and build the chosen map.
pub fn enter_play(
    mut commands: Commands,
    level: Option<Res<CurrentLevel>>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<ScrollCamera>,
    textures: NonSend<TextureStore>,
) {
    let Some(level) = level else {
        warn!("enter_play without a chosen level");
        return;
    };
    camera.x = 0.0;
    camera.speed = config.scroll_speed;
    info!("Building map '{}' ({:?})", level.id, level.theme);
    build_map(&mut commands, level.theme, *screen, &textures);
}

/// Spawn the full entity set of one map: parallax layers, ground,
/// decorations, and collectibles.
pub fn build_map(
    commands: &mut Commands,
    theme: MapTheme,
    screen: ScreenSize,
    textures: &TextureStore,
) {
    let sh = screen.h as f32;

    for spec in theme.layers() {
        spawn_parallax_layer(commands, &spec, screen, textures);
    }
    spawn_ground(commands, &theme.ground(), screen, textures);

    let theme_index = MapTheme::ALL.iter().position(|t| *t == theme).unwrap_or(0);
    let mut rng = fastrand::Rng::with_seed(0xD217_0000 + theme_index as u64);

    match theme.decorations() {
        DecorSpec::None => {}
        DecorSpec::Cacti { count } => {
            let ground_top = sh * theme.ground().y_frac;
            let mut x = 500.0;
            for _ in 0..count {
                let height = 40.0 + rng.f32() * 50.0;
                commands.spawn((
                    Cactus::new(height, rng.bool()),
                    MapPosition::new(x, ground_top),
                    ZIndex(1),
                ));
                x += 300.0 + rng.f32() * 350.0;
            }
        }
        DecorSpec::Particles { kind, count } => {
            commands.spawn(ParticleField::new(
                kind,
                count,
                Vector2 {
                    x: screen.w as f32,
                    y: sh,
                },
                rng.u64(..),
            ));
        }
    }

    spawn_collectibles(commands, &theme, sh);
}

/// One parallax layer entity. The tile width follows the texture's aspect
/// ratio at the layer's target height; a missing texture gets one
/// screen-wide tile.
fn spawn_parallax_layer(
    commands: &mut Commands,
    spec: &LayerSpec,
    screen: ScreenSize,
    textures: &TextureStore,
) {
    let height = (spec.height_frac * screen.h as f32) as i32;
    let width = tile_width_for(textures, spec.tex_key, height, screen.w);
    match TileStrip::new(width, height, spec.scroll_factor) {
        Ok(strip) => {
            commands.spawn((
                strip,
                layer_sprite(spec.tex_key, width, height),
                ScreenPosition::new(0.0, spec.y_frac * screen.h as f32),
                ZIndex(spec.z),
                Tint::from_color(spec.tint),
            ));
        }
        Err(e) => error!("Skipping layer '{}': {}", spec.tex_key, e),
    }
}

/// The 1:1 ground entity.
fn spawn_ground(
    commands: &mut Commands,
    spec: &LayerSpec,
    screen: ScreenSize,
    textures: &TextureStore,
) {
    let height = (spec.height_frac * screen.h as f32) as i32;
    let width = tile_width_for(textures, spec.tex_key, height, screen.w);
    match GroundStrip::new(width, height) {
        Ok(strip) => {
            commands.spawn((
                strip,
                layer_sprite(spec.tex_key, width, height),
                ScreenPosition::new(0.0, spec.y_frac * screen.h as f32),
                ZIndex(spec.z),
                Tint::from_color(spec.tint),
            ));
        }
        Err(e) => error!("Skipping ground '{}': {}", spec.tex_key, e),
    }
}

/// Tile width preserving the texture's aspect ratio at the given height,
/// falling back to one screen width when the texture is missing.
fn tile_width_for(textures: &TextureStore, key: &str, height: i32, screen_w: i32) -> i32 {
    textures
        .get(key)
        .filter(|tex| tex.height > 0)
        .map(|tex| (tex.width as f32 * height as f32 / tex.height as f32) as i32)
        .unwrap_or(screen_w)
}

/// Strip sprite: full-texture frame, top-left pivot.
fn layer_sprite(tex_key: &str, width: i32, height: i32) -> Sprite {
    Sprite {
        tex_key: tex_key.into(),
        width: width as f32,
        height: height as f32,
        offset: Vector2 { x: 0.0, y: 0.0 },
        origin: Vector2 { x: 0.0, y: 0.0 },
    }
}

/// A line of items ahead of the runner, cycling through the four kinds.
fn spawn_collectibles(commands: &mut Commands, theme: &MapTheme, screen_h: f32) {
    let kinds = [
        CollectibleKind::HealthHeart,
        CollectibleKind::DamageBoost,
        CollectibleKind::SpeedFlame,
        CollectibleKind::MagicPotion,
    ];
    let base_y = screen_h * theme.ground().y_frac - 48.0;
    for i in 0..ITEM_COUNT {
        let kind = kinds[i % kinds.len()];
        let x = FIRST_ITEM_X + i as f32 * ITEM_SPACING;
        commands.spawn((
            Collectible::new(kind, base_y).with_phase(i as f32 * 0.7),
            MapPosition::new(x, base_y),
            Sprite::centered(kind.texture_key(), 24.0, 24.0),
            Tint::default(),
            ZIndex(5),
        ));
    }
}

/// Despawn every entity that doesn't carry [`Persistent`].
pub fn clean_scene(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Signal the main loop to exit.
pub fn quit_game(mut commands: Commands) {
    info!("Quitting");
    commands.insert_resource(QuitRequested);
}
