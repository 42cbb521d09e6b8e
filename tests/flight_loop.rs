//! Exercises the headless update loop: straight-line motion with no
//! obstacles stays on the spawn ray indefinitely.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use common::{captured, position_of, spawn_projectile_at, test_app};
use perseid::{heading_vector, Projectile};
use rstest::rstest;
use std::f32::consts::FRAC_PI_2;

#[rstest]
#[case::eastbound(0.0, 5.0)]
#[case::northbound(FRAC_PI_2, 5.0)]
#[case::diagonal(0.7, 3.0)]
fn motion_stays_on_the_spawn_ray(#[case] heading: f32, #[case] speed: f32) {
    let mut app = test_app();
    let start = Vec2::new(100.0, 100.0);
    let entity = spawn_projectile_at(
        &mut app,
        start.x,
        start.y,
        Projectile::with_speed(heading, speed),
    );

    for tick in 1..=10 {
        app.update();
        let position = position_of(&app, entity).expect("projectile should stay alive");
        let expected = start + heading_vector(heading) * (speed * tick as f32);
        assert_relative_eq!(position.x, expected.x, epsilon = 1e-3);
        assert_relative_eq!(position.y, expected.y, epsilon = 1e-3);
    }

    assert_eq!(captured(&app), (0, 0), "no terminal event should fire");
}

#[test]
fn empty_obstacle_field_never_terminates_flight() {
    let mut app = test_app();
    // Heading straight up from the bottom of an 800x600 viewport at one
    // unit per tick leaves plenty of in-bounds ticks.
    let entity = spawn_projectile_at(&mut app, 400.0, 10.0, Projectile::with_speed(FRAC_PI_2, 1.0));

    for _ in 0..200 {
        app.update();
    }

    assert!(position_of(&app, entity).is_some());
    assert_eq!(captured(&app), (0, 0));
}

#[test]
fn zero_speed_projectile_hovers_in_place() {
    let mut app = test_app();
    let entity = spawn_projectile_at(&mut app, 50.0, 60.0, Projectile::with_speed(1.0, 0.0));

    for _ in 0..5 {
        app.update();
    }

    let position = position_of(&app, entity).expect("projectile should stay alive");
    assert_relative_eq!(position.x, 50.0);
    assert_relative_eq!(position.y, 60.0);
    assert_eq!(captured(&app), (0, 0));
}
