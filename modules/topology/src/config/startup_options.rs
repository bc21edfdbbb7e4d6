use core::time::Duration;
use std::collections::HashSet;

use crate::{
  config::{ConfigError, RestartIntensity, StartupOptionsBuilder, ViewPortConfig},
  viewport::DriverRegistry,
};


pub(crate) const DEFAULT_BOOT_WINDOW: Duration = Duration::from_secs(5);
pub(crate) const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Options handed to [`RootCoordinator::start`](crate::root::RootCoordinator::start).
///
/// Immutable once the root is started: the boot-time ViewPorts become permanent children and the remaining
/// settings are shared by every subtree of the topology.
#[derive(Clone, Debug)]
pub struct StartupOptions {
  pub(crate) viewports:          Vec<ViewPortConfig>,
  pub(crate) drivers:            DriverRegistry,
  pub(crate) root_intensity:     RestartIntensity,
  pub(crate) cache_intensity:    RestartIntensity,
  pub(crate) static_intensity:   RestartIntensity,
  pub(crate) dynamic_intensity:  RestartIntensity,
  pub(crate) viewport_intensity: RestartIntensity,
  pub(crate) boot_window:        Duration,
  pub(crate) shutdown_grace:     Duration,
}

impl StartupOptions {
  /// Starts a builder with default intensities and timeouts and no ViewPorts.
  #[must_use]
  pub fn builder() -> StartupOptionsBuilder {
    StartupOptionsBuilder::new()
  }

  /// ViewPorts started with the root, in start order.
  #[must_use]
  pub fn viewports(&self) -> &[ViewPortConfig] {
    &self.viewports
  }

  /// Driver modules available to every ViewPort.
  #[must_use]
  pub const fn drivers(&self) -> &DriverRegistry {
    &self.drivers
  }

  /// Restart intensity of the root coordinator.
  #[must_use]
  pub const fn root_intensity(&self) -> RestartIntensity {
    self.root_intensity
  }

  /// Restart intensity of the cache supervisor.
  #[must_use]
  pub const fn cache_intensity(&self) -> RestartIntensity {
    self.cache_intensity
  }

  /// Restart intensity of the static ViewPort supervisor.
  #[must_use]
  pub const fn static_intensity(&self) -> RestartIntensity {
    self.static_intensity
  }

  /// Restart intensity of the dynamic ViewPort supervisor.
  #[must_use]
  pub const fn dynamic_intensity(&self) -> RestartIntensity {
    self.dynamic_intensity
  }

  /// Restart intensity of each ViewPort's driver supervisor.
  #[must_use]
  pub const fn viewport_intensity(&self) -> RestartIntensity {
    self.viewport_intensity
  }

  /// Bound on every child's init handshake.
  #[must_use]
  pub const fn boot_window(&self) -> Duration {
    self.boot_window
  }

  /// Grace given to a ViewPort subtree before it is killed during shutdown.
  #[must_use]
  pub const fn shutdown_grace(&self) -> Duration {
    self.shutdown_grace
  }

  /// Validates every boot-time ViewPort and checks that names are unique and driver modules known.
  ///
  /// # Errors
  ///
  /// Returns the first [`ConfigError`] found, in ViewPort order.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut names = HashSet::new();
    for viewport in &self.viewports {
      viewport.validate()?;
      self.drivers.check(viewport)?;
      if !names.insert(viewport.name()) {
        return Err(ConfigError::DuplicateViewPort(viewport.name().clone()));
      }
    }
    Ok(())
  }
}

impl Default for StartupOptions {
  fn default() -> Self {
    StartupOptionsBuilder::new().build()
  }
}
