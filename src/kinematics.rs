//! Flight kinematics helper functions.
//!
//! Provides the per-tick motion step and obstacle scan used by the
//! flight systems. These functions operate on plain values so they can
//! be reused both inside the ECS systems and in standalone unit tests.

use glam::Vec2;

use crate::geometry::{circle_contains, heading_vector};

/// Computes the candidate position one tick ahead of `position`.
///
/// Motion is constant-step: each tick advances the point by `speed`
/// world units along the fixed `heading`, independent of wall-clock
/// frame timing.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use perseid::kinematics::step_point;
/// let next = step_point(Vec2::new(100.0, 100.0), 0.0, 5.0);
/// assert!((next.x - 105.0).abs() < 1e-4);
/// assert!((next.y - 100.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn step_point(position: Vec2, heading: f32, speed: f32) -> Vec2 {
    position + heading_vector(heading) * speed
}

/// Scans `obstacles` in iteration order and returns the tag of the
/// first one whose interior strictly contains `candidate`.
///
/// The first match wins; no nearest-obstacle tie-break is applied.
/// Obstacles are `(tag, centre, radius)` triples so callers can thread
/// through whatever identifier they need.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use perseid::kinematics::first_struck;
/// let obstacles = [
///     ("far", Vec2::new(500.0, 500.0), 10.0),
///     ("near", Vec2::new(130.0, 100.0), 10.0),
///     ("overlapping", Vec2::new(131.0, 100.0), 10.0),
/// ];
/// let struck = first_struck(Vec2::new(130.0, 100.0), obstacles);
/// assert_eq!(struck, Some("near"));
/// ```
#[must_use]
pub fn first_struck<T, I>(candidate: Vec2, obstacles: I) -> Option<T>
where
    I: IntoIterator<Item = (T, Vec2, f32)>,
{
    obstacles
        .into_iter()
        .find(|&(_, centre, radius)| circle_contains(centre, radius, candidate))
        .map(|(tag, _, _)| tag)
}
