//! Systems advancing live projectiles and retiring struck ones.

use bevy::prelude::*;
use log::debug;

use crate::components::{Collided, Obstacle, Projectile};
use crate::kinematics::{first_struck, step_point};
use crate::viewport::Viewport;

use super::{FlightConfig, ObstacleHit, ProjectileRemoved, TrajectoryFault};

/// Per-projectile row read by the advance pass.
type ProjectileRow<'w> = (Entity, &'w mut Transform, &'w Projectile);

/// Advances every live projectile one tick and detects its terminal
/// condition.
///
/// For each projectile without a [`Collided`] marker, in order:
/// compute the candidate next position, scan the obstacle field for
/// the first strike, then check the live viewport bounds, and finally
/// commit the candidate if neither terminal condition holds. A strike
/// freezes the projectile at the collision point, starts the removal
/// countdown, and writes [`ObstacleHit`]; leaving the viewport
/// despawns it immediately and writes [`ProjectileRemoved`].
///
/// The obstacle field is rebuilt from the ECS each tick, so hosts may
/// spawn or despawn planets freely between frames. Obstacles are
/// visited in ascending entity order and the first match wins; there
/// is no nearest-obstacle tie-break.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_projectiles_system(
    mut commands: Commands,
    viewport: Res<Viewport>,
    config: Res<FlightConfig>,
    mut projectiles: Query<ProjectileRow<'_>, Without<Collided>>,
    obstacles: Query<(Entity, &Transform, &Obstacle), Without<Projectile>>,
    mut hits: MessageWriter<ObstacleHit>,
    mut removals: MessageWriter<ProjectileRemoved>,
) {
    let mut field: Vec<(Entity, Vec2, f32)> = obstacles
        .iter()
        .map(|(entity, transform, obstacle)| {
            (entity, transform.translation.truncate(), obstacle.radius)
        })
        .collect();
    field.sort_unstable_by_key(|&(entity, _, _)| entity);

    for (entity, mut transform, projectile) in &mut projectiles {
        let position = transform.translation.truncate();
        let candidate = step_point(position, projectile.heading, projectile.speed);

        if !candidate.is_finite() {
            commands.trigger(TrajectoryFault { projectile: entity });
            commands.entity(entity).despawn();
            removals.write(ProjectileRemoved { projectile: entity });
            continue;
        }

        if let Some(obstacle) = first_struck(candidate, field.iter().copied()) {
            // Commit the collision point so the frozen position is
            // where the strike was detected.
            transform.translation.x = candidate.x;
            transform.translation.y = candidate.y;
            commands
                .entity(entity)
                .insert(Collided::new(config.removal_delay_seconds));
            hits.write(ObstacleHit {
                projectile: entity,
                obstacle,
            });
            debug!(
                "projectile {entity:?} struck {obstacle:?} at ({}, {})",
                candidate.x, candidate.y
            );
            continue;
        }

        if !viewport.contains(candidate) {
            commands.entity(entity).despawn();
            removals.write(ProjectileRemoved { projectile: entity });
            debug!(
                "projectile {entity:?} left the viewport at ({}, {})",
                candidate.x, candidate.y
            );
            continue;
        }

        transform.translation.x = candidate.x;
        transform.translation.y = candidate.y;
    }
}

/// Ticks the removal countdown on struck projectiles and despawns them
/// when it elapses, writing [`ProjectileRemoved`] exactly once.
///
/// The countdown lives on the projectile entity, so a host despawn
/// before expiry drops the timer with the entity and suppresses the
/// notification.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn retire_collided_system(
    mut commands: Commands,
    time: Res<Time>,
    mut struck: Query<(Entity, &mut Collided)>,
    mut removals: MessageWriter<ProjectileRemoved>,
) {
    for (entity, mut state) in &mut struck {
        if state.removal.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn();
            removals.write(ProjectileRemoved { projectile: entity });
            debug!("projectile {entity:?} retired after impact");
        }
    }
}
