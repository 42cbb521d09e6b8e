//! Bevy plugin wiring the flight systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::error;
use thiserror::Error;

use crate::viewport::Viewport;

use super::{
    advance_projectiles_system, retire_collided_system, FlightConfig, ObstacleHit,
    ProjectileRemoved,
};

/// Event raised when a projectile's position leaves the finite numeric
/// domain, for example because the host wrote NaN into its transform.
///
/// The offending entity is despawned on the same tick (with the usual
/// [`ProjectileRemoved`] notification) and an observer logs the fault
/// so the anomaly stays visible in release builds.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("projectile {projectile:?} produced a non-finite position")]
pub struct TrajectoryFault {
    /// The projectile whose candidate position was not finite.
    pub projectile: Entity,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_trajectory_fault(event: On<TrajectoryFault>) {
    let TrajectoryFault { projectile } = event.event();
    error!("flight fault: projectile {projectile:?} produced a non-finite position; removed");
}

/// Bevy plugin installing the projectile flight controller.
///
/// Registers the [`ObstacleHit`] and [`ProjectileRemoved`] messages,
/// the [`Viewport`] and [`FlightConfig`] resources, and the advance and
/// retire systems chained in `Update`. With the `render` feature the
/// viewport is synchronised from the primary window ahead of the
/// flight systems each frame.
#[derive(Default)]
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_trajectory_fault);

        app.init_resource::<Viewport>();
        app.init_resource::<FlightConfig>();
        app.add_message::<ObstacleHit>();
        app.add_message::<ProjectileRemoved>();

        app.add_systems(
            Update,
            (advance_projectiles_system, retire_collided_system).chain(),
        );

        #[cfg(feature = "render")]
        app.add_systems(
            Update,
            crate::viewport::sync_viewport_system.before(advance_projectiles_system),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_initialises_resources_and_messages() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FlightPlugin);
        assert!(app.world().contains_resource::<Viewport>());
        assert!(app.world().contains_resource::<FlightConfig>());
        assert!(app.world().contains_resource::<Messages<ObstacleHit>>());
        assert!(app
            .world()
            .contains_resource::<Messages<ProjectileRemoved>>());
        app.update();
    }

    #[rstest]
    fn plugin_leaves_existing_config_untouched() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(FlightConfig {
            removal_delay_seconds: 0.0,
        });
        app.add_plugins(FlightPlugin);
        let config = app.world().resource::<FlightConfig>();
        assert!(config.removal_delay_seconds.abs() < f32::EPSILON);
    }
}
