//! Shared helpers for the flight integration tests.
#![allow(dead_code)]

use bevy::prelude::*;
use perseid::{FlightPlugin, Obstacle, ObstacleHit, Projectile, ProjectileRemoved};

/// Terminal notifications captured from the flight controller.
#[derive(Resource, Default)]
pub struct Captured {
    /// Every obstacle strike reported so far, in arrival order.
    pub hits: Vec<ObstacleHit>,
    /// Every removal reported so far, in arrival order.
    pub removals: Vec<ProjectileRemoved>,
}

fn capture_messages(
    mut captured: ResMut<Captured>,
    mut hits: MessageReader<ObstacleHit>,
    mut removals: MessageReader<ProjectileRemoved>,
) {
    captured.hits.extend(hits.read().copied());
    captured.removals.extend(removals.read().copied());
}

/// Builds a headless app with the flight controller and message
/// capture installed.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(FlightPlugin);
    app.init_resource::<Captured>();
    app.add_systems(
        Update,
        capture_messages.after(perseid::retire_collided_system),
    );
    app
}

/// Spawns a projectile entity directly, bypassing spawn validation.
pub fn spawn_projectile_at(app: &mut App, x: f32, y: f32, projectile: Projectile) -> Entity {
    app.world_mut()
        .spawn((projectile, Transform::from_xyz(x, y, 0.0)))
        .id()
}

/// Spawns an obstacle entity at the given centre.
pub fn spawn_obstacle_at(app: &mut App, x: f32, y: f32, radius: f32) -> Entity {
    app.world_mut()
        .spawn((Obstacle::new(radius), Transform::from_xyz(x, y, 0.0)))
        .id()
}

/// Current 2D position of an entity, if it still exists.
pub fn position_of(app: &App, entity: Entity) -> Option<Vec2> {
    app.world()
        .get::<Transform>(entity)
        .map(|transform| transform.translation.truncate())
}

/// Counts of captured (hits, removals) so far.
pub fn captured(app: &App) -> (usize, usize) {
    let captured = app.world().resource::<Captured>();
    (captured.hits.len(), captured.removals.len())
}
