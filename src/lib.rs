#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Perseid game core.
//!
//! The heart of the crate is the projectile flight controller
//! ([`flight`]): a Bevy plugin that advances projectiles tick by tick,
//! detects obstacle strikes and off-screen exits, and reports each
//! projectile's single terminal event to the host. The simulation runs
//! headlessly; rendering and input live behind the `render` feature.

pub mod components;
pub mod constants;
pub mod flight;
pub mod geometry;
pub mod kinematics;
pub mod logging;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod spawn_world;
pub mod viewport;

pub use constants::*;

// Re-export commonly used items
pub use components::{Collided, Obstacle, Projectile};
pub use flight::{
    advance_projectiles_system, retire_collided_system, spawn_projectile, FlightConfig,
    FlightPlugin, ObstacleHit, ProjectileRemoved, SpawnError, TrajectoryFault,
};
pub use geometry::{circle_contains, heading_vector};
pub use kinematics::{first_struck, step_point};
pub use logging::init as init_logging;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use spawn_world::{fire_on_click_system, spawn_world_system};
pub use viewport::Viewport;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use perseid::prelude::*;
    //! ```

    pub use crate::components::{Collided, Obstacle, Projectile};
    pub use crate::flight::{
        spawn_projectile, FlightConfig, FlightPlugin, ObstacleHit, ProjectileRemoved,
    };
    pub use crate::viewport::Viewport;
}
