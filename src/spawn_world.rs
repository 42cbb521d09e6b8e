//! Demo scene: a field of planets and a click-to-fire launch site.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use log::warn;

use crate::components::{Obstacle, Projectile};
use crate::constants::LAUNCH_SITE_HEIGHT;
use crate::flight::spawn_projectile;
use crate::viewport::Viewport;

/// Spawns the demo planet field directly into the Bevy ECS.
pub fn spawn_world_system(mut commands: Commands) {
    commands.spawn((
        Obstacle::new(45.0),
        Transform::from_xyz(180.0, 430.0, 0.0),
        Name::new("Umber"),
    ));
    commands.spawn((
        Obstacle::new(30.0),
        Transform::from_xyz(420.0, 330.0, 0.0),
        Name::new("Cinder"),
    ));
    commands.spawn((
        Obstacle::new(60.0),
        Transform::from_xyz(640.0, 470.0, 0.0),
        Name::new("Goliath"),
    ));
}

/// The fixed point demo projectiles launch from: the bottom centre of
/// the viewport.
#[must_use]
pub fn launch_site(viewport: &Viewport) -> Vec2 {
    Vec2::new(viewport.width / 2.0, LAUNCH_SITE_HEIGHT)
}

/// Fires a projectile from the launch site toward the clicked point.
///
/// Spawn rejections are logged and otherwise ignored; a click without
/// a cursor position (e.g. outside the window) does nothing.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn fire_on_click_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    viewport: Res<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // Window cursor coordinates run top-down; world coordinates run
    // bottom-up.
    let target = Vec2::new(cursor.x, viewport.height - cursor.y);
    let origin = launch_site(&viewport);
    let aim = target - origin;
    let heading = aim.y.atan2(aim.x);

    if let Err(error) = spawn_projectile(&mut commands, origin, Projectile::new(heading)) {
        warn!("fire control rejected: {error}");
    }
}
