//! Basic 2D geometry helper functions.
//! Small helpers for headings and circle containment tests.
use glam::Vec2;

/// Returns the unit direction vector for a heading angle in radians.
///
/// A heading of `0.0` points along positive x and angles increase
/// anticlockwise. Non-finite headings yield the zero vector rather than
/// propagating NaN components into positions.
///
/// # Examples
///
/// ```
/// use perseid::geometry::heading_vector;
/// let east = heading_vector(0.0);
/// assert!((east.x - 1.0).abs() < 1e-6);
/// assert!(east.y.abs() < 1e-6);
///
/// let nowhere = heading_vector(f32::NAN);
/// assert_eq!(nowhere, glam::Vec2::ZERO);
/// ```
#[must_use]
pub fn heading_vector(heading: f32) -> Vec2 {
    if !heading.is_finite() {
        return Vec2::ZERO;
    }
    Vec2::new(heading.cos(), heading.sin())
}

/// Reports whether `point` lies strictly inside the circle at `centre`
/// with the given `radius`.
///
/// The comparison is a strict inequality, so a point exactly on the rim
/// is outside and a circle with zero or negative radius can contain
/// nothing.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use perseid::geometry::circle_contains;
/// let centre = Vec2::new(130.0, 100.0);
/// assert!(circle_contains(centre, 10.0, Vec2::new(130.0, 100.0)));
/// assert!(!circle_contains(centre, 10.0, Vec2::new(140.0, 100.0)));
/// assert!(!circle_contains(centre, 0.0, centre));
/// ```
#[must_use]
pub fn circle_contains(centre: Vec2, radius: f32, point: Vec2) -> bool {
    if radius <= 0.0 {
        return false;
    }
    point.distance_squared(centre) < radius * radius
}
