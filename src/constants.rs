//! Gameplay tuning constants used across systems.
//!
//! These values are hardcoded rather than read from configuration; the
//! tuning is part of the game's identity, not a deployment concern.

/// Projectile advance per update tick, in world units.
pub const PROJECTILE_SPEED: f32 = 5.0;
/// Radius of the rendered projectile circle, in world units.
pub const PROJECTILE_RADIUS: f32 = 3.0;
/// Seconds between a projectile striking a planet and its removal.
pub const REMOVAL_DELAY_SECONDS: f32 = 0.1;
/// Viewport width assumed until a window reports its size.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
/// Viewport height assumed until a window reports its size.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
/// Height of the demo launch site above the bottom viewport edge, in
/// world units.
pub const LAUNCH_SITE_HEIGHT: f32 = 40.0;
