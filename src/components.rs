//! ECS component types used by the game.
//! Flight state for projectiles and the planet obstacles they strike.
use bevy::prelude::*;
use serde::Serialize;

use crate::constants::PROJECTILE_SPEED;

/// A projectile in flight.
///
/// Heading and speed are fixed for the entity's lifetime; the current
/// position lives in the entity's [`Transform`].
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Projectile {
    /// Flight direction in radians, anticlockwise from positive x.
    pub heading: f32,
    /// Advance per update tick, in world units.
    pub speed: f32,
}

impl Projectile {
    /// Creates a projectile flying along `heading` at the standard
    /// speed.
    #[must_use]
    pub const fn new(heading: f32) -> Self {
        Self {
            heading,
            speed: PROJECTILE_SPEED,
        }
    }

    /// Creates a projectile with an explicit per-tick speed.
    #[must_use]
    pub const fn with_speed(heading: f32, speed: f32) -> Self {
        Self { heading, speed }
    }
}

/// A circular planet that terminates any projectile entering it.
///
/// Obstacles are owned by the host scene; the flight systems only read
/// them. The centre is the entity's [`Transform`] translation.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Obstacle {
    /// Collision radius in world units.
    pub radius: f32,
}

impl Obstacle {
    /// Creates an obstacle with the given collision radius.
    #[must_use]
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Terminal marker for a projectile that struck an obstacle.
///
/// While present, the projectile's position is frozen and it is no
/// longer drawn. The contained timer owns the pending removal; when the
/// entity is despawned early the timer is dropped with it and no
/// removal notification fires.
#[derive(Component, Debug)]
pub struct Collided {
    /// One-shot countdown until the entity is despawned.
    pub removal: Timer,
}

impl Collided {
    /// Starts the removal countdown at `delay_seconds`.
    #[must_use]
    pub fn new(delay_seconds: f32) -> Self {
        Self {
            removal: Timer::from_seconds(delay_seconds, TimerMode::Once),
        }
    }
}
