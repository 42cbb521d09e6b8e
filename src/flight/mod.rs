//! Projectile flight controller.
//!
//! Each update tick the controller advances every live projectile one
//! step along its fixed heading, scans the candidate position against
//! the current obstacle field, then checks it against the live
//! viewport. A strike freezes the projectile, notifies the host via
//! [`ObstacleHit`] and schedules removal after a short delay; leaving
//! the viewport removes it immediately. Either way the host receives
//! exactly one [`ProjectileRemoved`] per projectile, and none at all if
//! it despawns the entity first.

mod plugin;
mod systems;

pub use plugin::{FlightPlugin, TrajectoryFault};
pub use systems::{advance_projectiles_system, retire_collided_system};

use bevy::prelude::*;
use log::debug;
use thiserror::Error;

use crate::components::Projectile;
use crate::constants::REMOVAL_DELAY_SECONDS;

/// Message written once when a projectile strikes an obstacle.
///
/// The struck projectile is frozen at the collision point and will be
/// despawned after the configured removal delay.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleHit {
    /// The projectile that hit.
    pub projectile: Entity,
    /// The first obstacle, in scan order, whose interior contains the
    /// projectile's candidate position.
    pub obstacle: Entity,
}

/// Message written once when a projectile entity is despawned by the
/// controller, either on leaving the viewport or after the post-impact
/// removal delay.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileRemoved {
    /// The despawned projectile entity.
    pub projectile: Entity,
}

/// Runtime tuning for the flight controller.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FlightConfig {
    /// Seconds between an obstacle strike and the projectile's
    /// removal. The struck projectile stays in the world (frozen and
    /// undrawn) until the delay elapses.
    pub removal_delay_seconds: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            removal_delay_seconds: REMOVAL_DELAY_SECONDS,
        }
    }
}

/// Error returned when a projectile spawn request is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// The requested origin has a NaN or infinite coordinate.
    #[error("projectile origin ({x}, {y}) is not finite")]
    NonFiniteOrigin {
        /// Requested x coordinate.
        x: f32,
        /// Requested y coordinate.
        y: f32,
    },
    /// The requested heading is NaN or infinite.
    #[error("projectile heading {0} is not finite")]
    NonFiniteHeading(f32),
    /// The requested speed is NaN, infinite, or negative.
    #[error("projectile speed {0} must be finite and non-negative")]
    InvalidSpeed(f32),
}

/// Spawns a projectile at `origin`, validating the flight parameters.
///
/// The host owns the returned entity and may despawn it at any time to
/// cancel the flight; no notification fires for a host-despawned
/// projectile.
///
/// # Errors
///
/// Returns a [`SpawnError`] when the origin or heading is not finite,
/// or the speed is negative or not finite. Nothing is spawned in that
/// case.
pub fn spawn_projectile(
    commands: &mut Commands,
    origin: Vec2,
    projectile: Projectile,
) -> Result<Entity, SpawnError> {
    if !origin.is_finite() {
        return Err(SpawnError::NonFiniteOrigin {
            x: origin.x,
            y: origin.y,
        });
    }
    if !projectile.heading.is_finite() {
        return Err(SpawnError::NonFiniteHeading(projectile.heading));
    }
    if !projectile.speed.is_finite() || projectile.speed < 0.0 {
        return Err(SpawnError::InvalidSpeed(projectile.speed));
    }

    let entity = commands
        .spawn((projectile, Transform::from_xyz(origin.x, origin.y, 0.0)))
        .id();
    debug!(
        "spawned projectile {entity:?} at ({}, {}) heading {}",
        origin.x, origin.y, projectile.heading
    );
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_config_uses_standard_delay() {
        let config = FlightConfig::default();
        assert!((config.removal_delay_seconds - REMOVAL_DELAY_SECONDS).abs() < f32::EPSILON);
    }

    fn try_spawn(origin: Vec2, projectile: Projectile) -> Result<Entity, SpawnError> {
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let spawned = spawn_projectile(&mut commands, origin, projectile);
        queue.apply(&mut world);
        spawned
    }

    #[test]
    fn spawn_accepts_finite_parameters() {
        let spawned = try_spawn(Vec2::new(100.0, 100.0), Projectile::new(0.5));
        assert!(spawned.is_ok());
    }

    #[rstest]
    #[case::nan_origin(Vec2::new(f32::NAN, 0.0), Projectile::new(0.0))]
    #[case::infinite_origin(Vec2::new(0.0, f32::INFINITY), Projectile::new(0.0))]
    #[case::nan_heading(Vec2::ZERO, Projectile::new(f32::NAN))]
    #[case::negative_speed(Vec2::ZERO, Projectile::with_speed(0.0, -1.0))]
    #[case::infinite_speed(Vec2::ZERO, Projectile::with_speed(0.0, f32::INFINITY))]
    fn spawn_rejects_degenerate_parameters(#[case] origin: Vec2, #[case] projectile: Projectile) {
        assert!(try_spawn(origin, projectile).is_err());
    }
}
