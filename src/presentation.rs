//! Presentation layer plugin owning camera setup and scene drawing.
//!
//! `PresentationPlugin` keeps the camera centred on the viewport
//! rectangle and draws the scene with gizmo circles. It is a passive
//! observer of flight state: projectiles carrying a [`Collided`]
//! marker are no longer drawn, so a strike disappears from the screen
//! on the frame it happens.

use bevy::prelude::*;

use crate::components::{Collided, Obstacle, Projectile};
use crate::constants::PROJECTILE_RADIUS;
use crate::flight::retire_collided_system;
use crate::viewport::Viewport;

/// Colour of the rendered projectile circles.
const PROJECTILE_COLOUR: Color = Color::WHITE;
/// Colour of the rendered planet circles.
const PLANET_COLOUR: Color = Color::srgb(0.45, 0.55, 0.85);

/// Marker component for the main presentation camera.
///
/// Entities with this component are kept centred on the current
/// [`Viewport`] so world coordinates `[0, width] × [0, height]` fill
/// the window exactly.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CameraRig;

/// Spawns the presentation camera at startup if no camera exists.
///
/// If a `Camera2d` already exists (e.g. spawned by the host
/// application), this system does nothing to avoid creating duplicate
/// cameras.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn camera_setup(
    mut commands: Commands,
    cameras: Query<&Camera2d>,
    viewport: Res<Viewport>,
) {
    if cameras.is_empty() {
        commands.spawn((
            Camera2d,
            CameraRig,
            Name::new("PresentationCamera"),
            Transform::from_translation(viewport.centre().extend(0.0)),
        ));
    }
}

/// Keeps rig cameras centred on the live viewport rectangle.
///
/// Runs every frame so a window resize recentres the view on the same
/// tick the flight systems see the new bounds.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn track_viewport_system(
    viewport: Res<Viewport>,
    mut cameras: Query<&mut Transform, With<CameraRig>>,
) {
    let centre = viewport.centre();
    for mut transform in &mut cameras {
        transform.translation.x = centre.x;
        transform.translation.y = centre.y;
    }
}

/// Draws every obstacle and every live projectile as a circle.
///
/// Struck projectiles are filtered out by their [`Collided`] marker;
/// nothing of them is shown between the strike and their removal.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn draw_scene_system(
    mut gizmos: Gizmos,
    obstacles: Query<(&Transform, &Obstacle)>,
    projectiles: Query<&Transform, (With<Projectile>, Without<Collided>)>,
) {
    for (transform, obstacle) in &obstacles {
        gizmos.circle_2d(
            transform.translation.truncate(),
            obstacle.radius,
            PLANET_COLOUR,
        );
    }
    for transform in &projectiles {
        gizmos.circle_2d(
            transform.translation.truncate(),
            PROJECTILE_RADIUS,
            PROJECTILE_COLOUR,
        );
    }
}

/// Plugin owning camera setup and scene drawing.
///
/// Typically added alongside [`crate::FlightPlugin`]; the drawing
/// systems are ordered after the flight systems so terminal
/// transitions take visual effect on the frame they occur.
#[derive(Debug)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraRig>();
        app.init_resource::<Viewport>();
        app.add_systems(Startup, camera_setup);
        app.add_systems(
            Update,
            (track_viewport_system, draw_scene_system)
                .chain()
                .after(retire_collided_system),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_rig_is_copy_and_eq() {
        let rig = CameraRig;
        let copied = rig;
        assert_eq!(rig, copied);
    }

    #[test]
    fn scene_colours_are_distinct() {
        assert_ne!(PROJECTILE_COLOUR, PLANET_COLOUR);
    }
}
