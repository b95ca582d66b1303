//! Render system.
//!
//! One immediate-mode pass per frame, painter's algorithm back to front:
//! parallax strips by z-index, procedural decorations and particle fields,
//! world sprites, then screen-space UI (level select, HUD, debug overlay).
//!
//! The raylib handle is taken out of the world for the duration of the draw
//! scope so queries and the draw handle can coexist. Strips draw their
//! texture once per placement; when a texture key has no entry in the store
//! the layer falls back to a flat rectangle in its tint color, so maps stay
//! legible without shipped assets.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::decoration::Cactus;
use crate::components::effect::{ActiveEffect, EffectKind};
use crate::components::groundstrip::GroundStrip;
use crate::components::levelselect::LevelSelect;
use crate::components::mapposition::MapPosition;
use crate::components::particlefield::{FieldKind, ParticleField};
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tilestrip::TileStrip;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera::ScrollCamera;
use crate::resources::currentlevel::CurrentLevel;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Exclusive render system: draws the whole frame.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<raylib::RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    // refresh screen size; the window may have been resized
    let (sw, sh) = (rl.get_screen_width(), rl.get_screen_height());
    {
        let mut screen = world.resource_mut::<ScreenSize>();
        screen.w = sw;
        screen.h = sh;
    }

    let sky = sky_color(world);
    let fps = rl.get_fps();

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(sky);

        draw_strips(world, &mut d);
        draw_cacti(world, &mut d);
        draw_particle_fields(world, &mut d);
        draw_world_sprites(world, &mut d);
        draw_level_select(world, &mut d);
        draw_hud(world, &mut d);
        draw_debug_overlay(world, &mut d, fps);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Sky fill: the current map's sky while playing, a neutral slate otherwise.
fn sky_color(world: &World) -> Color {
    let playing = matches!(world.resource::<GameState>().get(), GameStates::Playing);
    match world.get_resource::<CurrentLevel>() {
        Some(level) if playing => level.theme.sky_color(),
        _ => Color::new(18, 22, 30, 255),
    }
}

/// Tile placements of one strip, pre-resolved for drawing.
struct StripDraw {
    xs: Vec<f32>,
    y: f32,
    width: f32,
    height: f32,
    tex_key: String,
    tint: Color,
    z: i32,
}

/// Draw every parallax and ground strip, back to front.
fn draw_strips(world: &mut World, d: &mut RaylibDrawHandle) {
    let camera = *world.resource::<ScrollCamera>();
    let screen = *world.resource::<ScreenSize>();

    let mut strips: Vec<StripDraw> = Vec::new();

    let mut parallax = world.query::<(&TileStrip, &Sprite, &ScreenPosition, &ZIndex, &Tint)>();
    for (strip, sprite, pos, z, tint) in parallax.iter(world) {
        let (a, b) = strip.tile_positions();
        strips.push(StripDraw {
            xs: vec![a, b],
            y: pos.pos.y,
            width: strip.tile_width,
            height: strip.tile_height,
            tex_key: sprite.tex_key.clone(),
            tint: tint.color,
            z: z.0,
        });
    }

    let mut ground = world.query::<(&GroundStrip, &Sprite, &ScreenPosition, &ZIndex, &Tint)>();
    for (strip, sprite, pos, z, tint) in ground.iter(world) {
        strips.push(StripDraw {
            xs: strip
                .visible_tile_origins(camera.x, screen.w as f32)
                .collect(),
            y: pos.pos.y,
            width: strip.tile_width,
            height: strip.tile_height,
            tex_key: sprite.tex_key.clone(),
            tint: tint.color,
            z: z.0,
        });
    }

    strips.sort_by_key(|s| s.z);

    let textures = world.non_send_resource::<TextureStore>();
    for strip in &strips {
        match textures.get(&strip.tex_key) {
            Some(tex) => {
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: tex.width as f32,
                    height: tex.height as f32,
                };
                for &x in &strip.xs {
                    let dest = Rectangle {
                        x,
                        y: strip.y,
                        width: strip.width,
                        height: strip.height,
                    };
                    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
                }
            }
            None => {
                for &x in &strip.xs {
                    d.draw_rectangle(
                        x as i32,
                        strip.y as i32,
                        strip.width as i32 + 1, // avoid hairline seams from truncation
                        strip.height as i32,
                        strip.tint,
                    );
                }
            }
        }
    }
}

/// Draw desert cacti as trunk-and-arms rectangles rooted at their map
/// position.
fn draw_cacti(world: &mut World, d: &mut RaylibDrawHandle) {
    let camera = *world.resource::<ScrollCamera>();
    let screen = *world.resource::<ScreenSize>();

    let mut cacti = world.query::<(&Cactus, &MapPosition)>();
    let to_draw: Vec<(Cactus, Vector2)> = cacti
        .iter(world)
        .map(|(c, p)| (*c, p.pos))
        .collect();

    let body = Color::new(45, 110, 60, 255);
    for (cactus, pos) in to_draw {
        let x = pos.x - camera.x;
        let trunk_w = cactus.trunk_width();
        if x + cactus.height < 0.0 || x - cactus.height > screen.w as f32 {
            continue;
        }
        // trunk, rooted at the ground line
        d.draw_rectangle(
            (x - trunk_w * 0.5) as i32,
            (pos.y - cactus.height) as i32,
            trunk_w as i32,
            cactus.height as i32,
            body,
        );
        // two arms at different heights, mirrored by flip
        let arm_len = cactus.height * 0.35;
        let arm_w = (trunk_w * 0.7) as i32;
        let (left, right) = if cactus.flip {
            (0.55, 0.35)
        } else {
            (0.35, 0.55)
        };
        d.draw_rectangle(
            (x - trunk_w * 0.5 - arm_len) as i32,
            (pos.y - cactus.height * left) as i32,
            arm_len as i32,
            arm_w,
            body,
        );
        d.draw_rectangle(
            (x + trunk_w * 0.5) as i32,
            (pos.y - cactus.height * right) as i32,
            arm_len as i32,
            arm_w,
            body,
        );
    }
}

/// Draw particle fields procedurally: embers fade as they climb, snowflakes
/// stay solid, stars twinkle on an elapsed-time sine.
fn draw_particle_fields(world: &mut World, d: &mut RaylibDrawHandle) {
    let elapsed = world.resource::<WorldTime>().elapsed;

    let mut fields = world.query::<&ParticleField>();
    let mut to_draw: Vec<(FieldKind, Vector2, f32, f32, f32)> = Vec::new();
    for field in fields.iter(world) {
        for p in &field.particles {
            to_draw.push((field.kind, p.pos, p.radius, p.phase, field.bounds.y));
        }
    }

    for (kind, pos, radius, phase, bound_y) in to_draw {
        let color = match kind {
            FieldKind::Embers => {
                let heat = (pos.y / bound_y).clamp(0.0, 1.0);
                Color::new(255, 120, 40, (80.0 + 175.0 * heat) as u8)
            }
            FieldKind::Snowflakes => Color::new(245, 250, 255, 230),
            FieldKind::Stars => {
                let twinkle = 0.5 + 0.5 * (elapsed * 2.0 + phase).sin();
                Color::new(230, 235, 255, (60.0 + 195.0 * twinkle) as u8)
            }
        };
        d.draw_circle(pos.x as i32, pos.y as i32, radius, color);
    }
}

/// Draw world-space sprites (collectibles) with the camera offset applied.
fn draw_world_sprites(world: &mut World, d: &mut RaylibDrawHandle) {
    let camera = *world.resource::<ScrollCamera>();
    let screen = *world.resource::<ScreenSize>();

    let mut q = world.query::<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Tint>,
        Option<&Collectible>,
    )>();
    let mut to_draw: Vec<(Sprite, Vector2, i32, Color, Option<CollectibleKind>)> = q
        .iter(world)
        .filter_map(|(s, p, z, tint, item)| {
            let x = p.pos.x - camera.x;
            // cull against the screen edges
            if x + s.width < 0.0 || x - s.width > screen.w as f32 {
                return None;
            }
            let color = tint.map(|t| t.color).unwrap_or(Color::WHITE);
            Some((s.clone(), Vector2 { x, y: p.pos.y }, z.0, color, item.map(|i| i.kind)))
        })
        .collect();

    to_draw.sort_by_key(|(_, _, z, _, _)| *z);

    let textures = world.non_send_resource::<TextureStore>();
    for (sprite, pos, _z, color, kind) in to_draw.iter() {
        match textures.get(&sprite.tex_key) {
            Some(tex) => {
                let src = Rectangle {
                    x: sprite.offset.x,
                    y: sprite.offset.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                let dest = Rectangle {
                    x: pos.x,
                    y: pos.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, *color);
            }
            None => {
                // flat fallback keeps items visible without shipped assets
                let fallback = kind.map(item_color).unwrap_or(Color::GRAY);
                let tinted = Color::new(fallback.r, fallback.g, fallback.b, color.a);
                d.draw_circle(pos.x as i32, pos.y as i32, sprite.width * 0.5, tinted);
            }
        }
    }
}

/// Flat fallback color per item kind.
fn item_color(kind: CollectibleKind) -> Color {
    match kind {
        CollectibleKind::HealthHeart => Color::new(220, 60, 70, 255),
        CollectibleKind::DamageBoost => Color::new(235, 140, 50, 255),
        CollectibleKind::SpeedFlame => Color::new(250, 210, 60, 255),
        CollectibleKind::MagicPotion => Color::new(150, 80, 220, 255),
    }
}

/// Draw the level selection grid: theme-colored slot tiles, names, and a
/// pulsing border on the highlighted slot.
fn draw_level_select(world: &mut World, d: &mut RaylibDrawHandle) {
    let elapsed = world.resource::<WorldTime>().elapsed;

    let mut screens = world.query::<&LevelSelect>();
    let to_draw: Vec<LevelSelect> = screens.iter(world).cloned().collect();

    for screen in to_draw {
        d.draw_text("SELECT LEVEL", 40, 20, 24, Color::RAYWHITE);
        for (i, slot) in screen.slots.iter().enumerate() {
            let rect = Rectangle {
                x: slot.position.x,
                y: slot.position.y,
                width: screen.slot_size.x,
                height: screen.slot_size.y,
            };
            let fill = if slot.locked {
                screen.locked_color
            } else {
                slot.theme.sky_color()
            };
            d.draw_rectangle_rec(rect, fill);

            let label_color = if slot.locked {
                Color::new(130, 130, 140, 255)
            } else {
                Color::RAYWHITE
            };
            d.draw_text(
                &slot.name,
                (rect.x + 8.0) as i32,
                (rect.y + rect.height - 24.0) as i32,
                16,
                label_color,
            );
            if slot.locked {
                d.draw_text(
                    "LOCKED",
                    (rect.x + 8.0) as i32,
                    (rect.y + 8.0) as i32,
                    12,
                    label_color,
                );
            }

            if i == screen.selected_index {
                let pulse = 0.5 + 0.5 * (elapsed * 4.0).sin();
                let mut border = screen.selected_color;
                border.a = (120.0 + 135.0 * pulse) as u8;
                d.draw_rectangle_lines_ex(rect, 3.0, border);
            }
        }
    }
}

/// Active-effect bars in the top-left corner, one per running effect.
fn draw_hud(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut effects = world.query::<&ActiveEffect>();
    let to_draw: Vec<ActiveEffect> = effects.iter(world).copied().collect();

    const BAR_W: f32 = 120.0;
    for (i, fx) in to_draw.iter().enumerate() {
        let y = 10 + i as i32 * 22;
        let color = match fx.kind {
            EffectKind::Heal => Color::new(220, 60, 70, 255),
            EffectKind::DamageBoost => Color::new(235, 140, 50, 255),
            EffectKind::SpeedBoost => Color::new(250, 210, 60, 255),
            EffectKind::Magic => Color::new(150, 80, 220, 255),
        };
        d.draw_rectangle(10, y, BAR_W as i32, 14, Color::new(0, 0, 0, 120));
        d.draw_rectangle(
            10,
            y,
            (BAR_W * fx.fraction_remaining()) as i32,
            14,
            color,
        );
        d.draw_text(&format!("{:?}", fx.kind), 14 + BAR_W as i32, y, 12, Color::RAYWHITE);
    }
}

/// FPS, entity count, and camera position when `DebugMode` is set.
fn draw_debug_overlay(world: &mut World, d: &mut RaylibDrawHandle, fps: u32) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();
    let camera = *world.resource::<ScrollCamera>();
    let entity_count = world.entities().len();

    let text = format!("DEBUG (F11) | FPS: {}", fps);
    d.draw_text(&text, 10, screen.h - 50, 10, Color::BLACK);
    let text = format!("Entities: {}", entity_count);
    d.draw_text(&text, 10, screen.h - 35, 10, Color::BLACK);
    let text = format!("Camera x: {:.1}", camera.x);
    d.draw_text(&text, 10, screen.h - 20, 10, Color::BLACK);
}
