//! Live viewport bounds consulted by the flight systems.
//!
//! The [`Viewport`] resource holds the current visible area. It is read
//! at check time each tick rather than captured at spawn, so a window
//! resize moves the off-screen boundary for projectiles already in
//! flight. Headless hosts keep the default size or write their own.

use bevy::prelude::*;
use serde::Serialize;

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// Current visible rendering area, in world units.
///
/// World coordinates run from the bottom-left corner `(0, 0)` to the
/// top-right corner `(width, height)`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Creates a viewport with the given dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reports whether `point` lies inside the closed viewport
    /// rectangle `[0, width] × [0, height]`.
    ///
    /// Points exactly on an edge are still inside; a projectile sitting
    /// on the boundary has not yet left the screen.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::math::Vec2;
    /// use perseid::viewport::Viewport;
    /// let viewport = Viewport::new(800.0, 600.0);
    /// assert!(viewport.contains(Vec2::new(0.0, 5.0)));
    /// assert!(!viewport.contains(Vec2::new(-5.0, 5.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Centre of the viewport rectangle.
    #[must_use]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Copies the primary window's current logical size into [`Viewport`].
///
/// Runs before the flight systems so a resize takes effect on the same
/// tick. Degenerate window sizes (zero or negative, as reported during
/// minimisation on some platforms) are ignored and the previous bounds
/// stay in force.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn sync_viewport_system(
    mut viewport: ResMut<Viewport>,
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    if (width - viewport.width).abs() > f32::EPSILON
        || (height - viewport.height).abs() > f32::EPSILON
    {
        log::debug!("viewport resized to {width}x{height}");
        viewport.width = width;
        viewport.height = height;
    }
}
