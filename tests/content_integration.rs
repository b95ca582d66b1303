//! Integration tests for map content: collectibles, temporary effects,
//! particle pools, the level selection flow, and scene teardown.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use driftrunner::components::collectible::{Collectible, CollectibleKind};
use driftrunner::components::effect::{ActiveEffect, EffectKind};
use driftrunner::components::levelselect::LevelSelect;
use driftrunner::components::mapposition::MapPosition;
use driftrunner::components::particlefield::{FIELD_CAPACITY, FieldKind, ParticleField};
use driftrunner::components::persistent::Persistent;
use driftrunner::components::tint::Tint;
use driftrunner::events::collect::CollectEvent;
use driftrunner::events::input::{InputAction, InputEvent};
use driftrunner::game::clean_scene;
use driftrunner::resources::camera::ScrollCamera;
use driftrunner::resources::currentlevel::CurrentLevel;
use driftrunner::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use driftrunner::resources::levelcatalog::LevelCatalog;
use driftrunner::resources::screensize::ScreenSize;
use driftrunner::resources::theme::MapTheme;
use driftrunner::resources::worldtime::WorldTime;
use driftrunner::systems::collectible::{
    collect_observer, collect_on_pass_system, collectible_float_system,
};
use driftrunner::systems::effect::effect_timer_system;
use driftrunner::systems::levelselect::{level_chosen_observer, level_select_observer};
use driftrunner::systems::particlefield::particle_field_system;
use driftrunner::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 640, h: 360 });
    world.insert_resource(ScrollCamera::default());
    world
}

fn tick_float(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collectible_float_system);
    schedule.run(world);
}

fn tick_effects(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(effect_timer_system);
    schedule.run(world);
}

fn tick_particles(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(particle_field_system);
    schedule.run(world);
}

fn tick_pickup(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collect_on_pass_system);
    schedule.run(world);
}

fn spawn_item(world: &mut World, kind: CollectibleKind, x: f32, base_y: f32) -> Entity {
    world
        .spawn((
            Collectible::new(kind, base_y),
            MapPosition::new(x, base_y),
            Tint::default(),
        ))
        .id()
}

// ---------------------------------------------------------------- items

#[test]
fn collectible_bobs_around_its_base_height() {
    let mut world = make_world(0.0);
    let item = spawn_item(&mut world, CollectibleKind::HealthHeart, 100.0, 200.0);

    world.resource_mut::<WorldTime>().elapsed = 1.25;
    tick_float(&mut world);

    let expected = 200.0 + 6.0 * (1.25_f32 * 2.0).sin();
    let pos = world.get::<MapPosition>(item).unwrap();
    assert!(approx_eq(pos.pos.y, expected));
    assert!((pos.pos.y - 200.0).abs() <= 6.0 + EPSILON);
}

#[test]
fn collectible_float_is_pure_in_elapsed_time() {
    let mut world = make_world(0.0);
    let item = spawn_item(&mut world, CollectibleKind::MagicPotion, 100.0, 200.0);

    world.resource_mut::<WorldTime>().elapsed = 3.0;
    tick_float(&mut world);
    let first = world.get::<MapPosition>(item).unwrap().pos.y;
    let first_alpha = world.get::<Tint>(item).unwrap().color.a;

    tick_float(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(item).unwrap().pos.y, first));
    assert_eq!(world.get::<Tint>(item).unwrap().color.a, first_alpha);
}

#[test]
fn collectible_alpha_pulses_within_bounds() {
    let mut world = make_world(0.0);
    let item = spawn_item(&mut world, CollectibleKind::SpeedFlame, 100.0, 200.0);

    let mut elapsed = 0.0_f32;
    while elapsed < 10.0 {
        world.resource_mut::<WorldTime>().elapsed = elapsed;
        tick_float(&mut world);
        let alpha = world.get::<Tint>(item).unwrap().color.a;
        assert!(alpha >= 139, "alpha {alpha} at {elapsed}");
        elapsed += 0.37;
    }
}

#[test]
fn collecting_an_item_spawns_its_effect() {
    let mut world = make_world(0.0);
    world.spawn(Observer::new(collect_observer));
    world.flush();

    let item = spawn_item(&mut world, CollectibleKind::SpeedFlame, 100.0, 200.0);
    world.trigger(CollectEvent { item });
    world.flush();

    assert!(world.get_entity(item).is_err(), "item should be consumed");
    let mut effects = world.query::<&ActiveEffect>();
    let fx: Vec<&ActiveEffect> = effects.iter(&world).collect();
    assert_eq!(fx.len(), 1);
    assert_eq!(fx[0].kind, EffectKind::SpeedBoost);
    assert!(approx_eq(fx[0].duration, 5.0));
}

#[test]
fn collecting_the_same_item_twice_grants_one_effect() {
    let mut world = make_world(0.0);
    world.spawn(Observer::new(collect_observer));
    world.flush();

    let item = spawn_item(&mut world, CollectibleKind::DamageBoost, 100.0, 200.0);
    world.trigger(CollectEvent { item });
    world.flush();
    world.trigger(CollectEvent { item });
    world.flush();

    let mut effects = world.query::<&ActiveEffect>();
    assert_eq!(effects.iter(&world).count(), 1);
}

#[test]
fn items_behind_the_runner_line_are_picked_up() {
    let mut world = make_world(0.0);
    world.spawn(Observer::new(collect_observer));
    world.flush();

    // runner line sits at 30% of a 640px screen = 192
    let near = spawn_item(&mut world, CollectibleKind::HealthHeart, 150.0, 200.0);
    let far = spawn_item(&mut world, CollectibleKind::MagicPotion, 500.0, 200.0);

    tick_pickup(&mut world);

    assert!(world.get_entity(near).is_err());
    assert!(world.get_entity(far).is_ok());

    // scrolling forward brings the far item over the line
    world.resource_mut::<ScrollCamera>().x = 400.0;
    tick_pickup(&mut world);
    assert!(world.get_entity(far).is_err());
}

// ---------------------------------------------------------------- effects

#[test]
fn effect_counts_down_and_expires() {
    let mut world = make_world(0.0);
    let fx = world.spawn(ActiveEffect::new(EffectKind::Magic, 1.0)).id();

    update_world_time(&mut world, 0.4);
    tick_effects(&mut world);
    let remaining = world.get::<ActiveEffect>(fx).unwrap().remaining;
    assert!(approx_eq(remaining, 0.6));

    update_world_time(&mut world, 0.4);
    tick_effects(&mut world);
    assert!(world.get_entity(fx).is_ok());

    update_world_time(&mut world, 0.4);
    tick_effects(&mut world);
    assert!(world.get_entity(fx).is_err(), "effect should expire");
}

#[test]
fn instantaneous_heal_expires_on_first_tick() {
    let mut world = make_world(0.0);
    let fx = world.spawn(ActiveEffect::new(EffectKind::Heal, 0.0)).id();

    update_world_time(&mut world, 1.0 / 60.0);
    tick_effects(&mut world);
    assert!(world.get_entity(fx).is_err());
}

#[test]
fn effect_fraction_shrinks_monotonically() {
    let mut world = make_world(0.0);
    let fx = world.spawn(ActiveEffect::new(EffectKind::DamageBoost, 8.0)).id();

    let mut last = 1.0_f32;
    for _ in 0..10 {
        update_world_time(&mut world, 0.25);
        tick_effects(&mut world);
        let fraction = world.get::<ActiveEffect>(fx).unwrap().fraction_remaining();
        assert!(fraction <= last);
        last = fraction;
    }
}

// ---------------------------------------------------------------- particles

#[test]
fn particle_pools_never_grow() {
    let mut world = make_world(0.0);
    let field = world
        .spawn(ParticleField::new(
            FieldKind::Snowflakes,
            200,
            Vector2 { x: 640.0, y: 360.0 },
            9,
        ))
        .id();

    for _ in 0..600 {
        update_world_time(&mut world, 1.0 / 30.0);
        tick_particles(&mut world);
    }

    let pool = world.get::<ParticleField>(field).unwrap();
    assert_eq!(pool.particles.len(), 200);
    assert!(pool.particles.capacity() == FIELD_CAPACITY);
}

#[test]
fn snowflakes_reset_to_the_top_after_leaving_the_bounds() {
    let mut world = make_world(0.0);
    let field = world
        .spawn(ParticleField::new(
            FieldKind::Snowflakes,
            32,
            Vector2 { x: 640.0, y: 360.0 },
            9,
        ))
        .id();

    {
        let mut pool = world.get_mut::<ParticleField>(field).unwrap();
        pool.particles[0].pos.y = 500.0; // past the bottom edge
    }
    update_world_time(&mut world, 1.0 / 60.0);
    tick_particles(&mut world);

    let pool = world.get::<ParticleField>(field).unwrap();
    let p = &pool.particles[0];
    assert!(p.pos.y < 10.0, "snowflake should re-enter at the top, got {}", p.pos.y);
    assert!(p.vel.y > 0.0);
}

#[test]
fn embers_rise_and_reset_at_the_top() {
    let mut world = make_world(0.0);
    let field = world
        .spawn(ParticleField::new(
            FieldKind::Embers,
            32,
            Vector2 { x: 640.0, y: 360.0 },
            17,
        ))
        .id();

    {
        let mut pool = world.get_mut::<ParticleField>(field).unwrap();
        pool.particles[0].pos.y = -20.0; // above the top edge
    }
    update_world_time(&mut world, 1.0 / 60.0);
    tick_particles(&mut world);

    let pool = world.get::<ParticleField>(field).unwrap();
    assert!(pool.particles[0].pos.y > 300.0, "ember should restart near the bottom");
}

#[test]
fn stars_hold_still() {
    let mut world = make_world(0.0);
    let field = world
        .spawn(ParticleField::new(
            FieldKind::Stars,
            32,
            Vector2 { x: 640.0, y: 360.0 },
            23,
        ))
        .id();

    let before: Vec<(f32, f32)> = world
        .get::<ParticleField>(field)
        .unwrap()
        .particles
        .iter()
        .map(|p| (p.pos.x, p.pos.y))
        .collect();

    for _ in 0..60 {
        update_world_time(&mut world, 1.0 / 60.0);
        tick_particles(&mut world);
    }

    let pool = world.get::<ParticleField>(field).unwrap();
    for (p, (x, y)) in pool.particles.iter().zip(before) {
        assert!(approx_eq(p.pos.x, x));
        assert!(approx_eq(p.pos.y, y));
    }
}

// ---------------------------------------------------------------- level select

fn make_select_world() -> (World, Entity) {
    let mut world = make_world(0.0);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.spawn(Observer::new(level_select_observer));
    world.spawn(Observer::new(level_chosen_observer));
    world.flush();

    let catalog = LevelCatalog::builtin();
    let screen = world
        .spawn(LevelSelect::new(
            &catalog,
            Vector2 { x: 40.0, y: 60.0 },
            3,
            Vector2 { x: 160.0, y: 90.0 },
            Vector2 { x: 180.0, y: 110.0 },
        ))
        .id();
    world.insert_resource(catalog);
    (world, screen)
}

fn press(world: &mut World, action: InputAction) {
    world.trigger(InputEvent {
        action,
        pressed: true,
    });
    world.flush();
}

#[test]
fn navigation_moves_the_highlight() {
    let (mut world, screen) = make_select_world();

    press(&mut world, InputAction::NavRight);
    press(&mut world, InputAction::NavDown);

    let select = world.get::<LevelSelect>(screen).unwrap();
    assert_eq!(select.selected().id, "starfall");
}

#[test]
fn choosing_an_unlocked_level_requests_playing() {
    let (mut world, _) = make_select_world();

    press(&mut world, InputAction::NavRight); // dunes
    press(&mut world, InputAction::Accept);

    let level = world.resource::<CurrentLevel>();
    assert_eq!(level.id, "dunes");
    assert_eq!(level.theme, MapTheme::Desert);
    assert!(matches!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Playing)
    ));
}

#[test]
fn locked_levels_cannot_be_activated() {
    let (mut world, _) = make_select_world();

    // bottom row holds the two locked levels
    press(&mut world, InputAction::NavDown);
    press(&mut world, InputAction::Accept);

    assert!(world.get_resource::<CurrentLevel>().is_none());
    assert!(matches!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    ));
}

#[test]
fn key_releases_do_not_navigate() {
    let (mut world, screen) = make_select_world();

    world.trigger(InputEvent {
        action: InputAction::NavRight,
        pressed: false,
    });
    world.flush();

    let select = world.get::<LevelSelect>(screen).unwrap();
    assert_eq!(select.selected_index, 0);
}

// ---------------------------------------------------------------- teardown

#[test]
fn clean_scene_spares_persistent_entities() {
    let mut world = make_world(0.0);
    let doomed = world.spawn(MapPosition::new(0.0, 0.0)).id();
    let kept = world.spawn((MapPosition::new(0.0, 0.0), Persistent)).id();

    let mut schedule = Schedule::default();
    schedule.add_systems(clean_scene);
    schedule.run(&mut world);

    assert!(world.get_entity(doomed).is_err());
    assert!(world.get_entity(kept).is_ok());
}
