//! Integration tests for the parallax scroller: strip placement invariants,
//! ground coverage, and the camera systems driving them.

use bevy_ecs::prelude::*;

use driftrunner::components::effect::{ActiveEffect, EffectKind};
use driftrunner::components::groundstrip::GroundStrip;
use driftrunner::components::tilestrip::{StripError, TileStrip};
use driftrunner::resources::camera::ScrollCamera;
use driftrunner::resources::screensize::ScreenSize;
use driftrunner::resources::worldtime::WorldTime;
use driftrunner::systems::camera::{SPEED_BOOST_FACTOR, camera_scroll_system};
use driftrunner::systems::parallax::parallax_scroll_system;
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

fn tick_parallax(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(parallax_scroll_system);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_scroll_system);
    schedule.run(world);
}

fn set_camera(world: &mut World, x: f32) {
    world.resource_mut::<ScrollCamera>().x = x;
}

#[test]
fn strips_follow_the_camera_at_their_scroll_factor() {
    let mut world = make_world(0.0);
    let entity = world.spawn(TileStrip::new(512, 256, 0.3).unwrap()).id();

    set_camera(&mut world, 1000.0);
    tick_parallax(&mut world);

    let strip = world.get::<TileStrip>(entity).unwrap();
    let (a, b) = strip.tile_positions();
    // offset 300: both raw placements stay within one tile of the viewport
    assert!(approx_eq(a, -300.0));
    assert!(approx_eq(b, 212.0));
}

#[test]
fn wrapped_placement_scenario() {
    let mut world = make_world(0.0);
    let entity = world.spawn(TileStrip::new(512, 256, 0.3).unwrap()).id();

    set_camera(&mut world, 2000.0);
    tick_parallax(&mut world);

    let strip = world.get::<TileStrip>(entity).unwrap();
    let (a, b) = strip.tile_positions();
    assert!(approx_eq(a, -88.0));
    assert!(approx_eq(b, 424.0));
    // the pair covers the viewport origin
    assert!(a <= 0.0 && b > 0.0);
}

#[test]
fn placements_stay_one_tile_apart_over_a_long_run() {
    let mut world = make_world(1.0 / 60.0);
    let entity = world.spawn(TileStrip::new(512, 256, 0.6).unwrap()).id();

    for frame in 0..2000 {
        update_world_time(&mut world, 1.0 / 60.0);
        {
            let mut camera = world.resource_mut::<ScrollCamera>();
            camera.x += 240.0 / 60.0;
        }
        tick_parallax(&mut world);

        let strip = world.get::<TileStrip>(entity).unwrap();
        let (a, b) = strip.tile_positions();
        assert_eq!(b - a, 512.0, "frame {frame}");
        let covered = (a..a + 512.0).contains(&0.0) || (b..b + 512.0).contains(&0.0);
        assert!(covered, "frame {frame}: gap at origin ({a}, {b})");
    }
}

#[test]
fn several_layers_scroll_independently() {
    let mut world = make_world(0.0);
    let far = world.spawn(TileStrip::new(512, 256, 0.1).unwrap()).id();
    let near = world.spawn(TileStrip::new(512, 256, 0.6).unwrap()).id();

    set_camera(&mut world, 400.0);
    tick_parallax(&mut world);

    let (far_a, _) = world.get::<TileStrip>(far).unwrap().tile_positions();
    let (near_a, _) = world.get::<TileStrip>(near).unwrap().tile_positions();
    assert!(approx_eq(far_a, -40.0));
    assert!(approx_eq(near_a, -240.0));
}

#[test]
fn advancing_twice_to_the_same_camera_is_idempotent() {
    let mut world = make_world(0.0);
    let entity = world.spawn(TileStrip::new(512, 256, 0.3).unwrap()).id();

    set_camera(&mut world, 7777.0);
    tick_parallax(&mut world);
    let first = world.get::<TileStrip>(entity).unwrap().tile_positions();
    tick_parallax(&mut world);
    let second = world.get::<TileStrip>(entity).unwrap().tile_positions();
    assert_eq!(first, second);
}

#[test]
fn ground_origins_cover_the_screen_at_any_camera() {
    let ground = GroundStrip::new(120, 54).unwrap();
    let viewport = 640.0;
    for camera in [-2400.0, -1.5, 0.0, 59.9, 120.0, 4321.25, 100_000.0] {
        let origins: Vec<f32> = ground.visible_tile_origins(camera, viewport).collect();
        assert!(origins.len() as f32 >= (viewport / 120.0).ceil() + 1.0);
        for pair in origins.windows(2) {
            assert!(approx_eq(pair[1] - pair[0], 120.0), "camera {camera}");
        }
        assert!(origins[0] <= 0.0, "camera {camera}");
        assert!(origins.last().unwrap() + 120.0 >= viewport, "camera {camera}");
    }
}

#[test]
fn construction_rejects_degenerate_tiles() {
    assert!(matches!(
        TileStrip::new(0, 256, 1.0),
        Err(StripError::InvalidDimension { .. })
    ));
    assert!(matches!(
        GroundStrip::new(-32, 54),
        Err(StripError::InvalidDimension { .. })
    ));
}

#[test]
fn camera_advances_by_speed_times_delta() {
    let mut world = make_world(0.0);
    world.insert_resource(ScrollCamera::default().with_speed(100.0));

    update_world_time(&mut world, 0.5);
    tick_camera(&mut world);

    assert!(approx_eq(world.resource::<ScrollCamera>().x, 50.0));
}

#[test]
fn speed_boost_doubles_camera_speed_while_active() {
    let mut world = make_world(0.0);
    world.insert_resource(ScrollCamera::default().with_speed(100.0));
    world.spawn(ActiveEffect::new(EffectKind::SpeedBoost, 5.0));

    update_world_time(&mut world, 1.0);
    tick_camera(&mut world);

    assert!(approx_eq(
        world.resource::<ScrollCamera>().x,
        100.0 * SPEED_BOOST_FACTOR
    ));
}

#[test]
fn non_speed_effects_leave_the_camera_alone() {
    let mut world = make_world(0.0);
    world.insert_resource(ScrollCamera::default().with_speed(100.0));
    world.spawn(ActiveEffect::new(EffectKind::Magic, 5.0));

    update_world_time(&mut world, 1.0);
    tick_camera(&mut world);

    assert!(approx_eq(world.resource::<ScrollCamera>().x, 100.0));
}
