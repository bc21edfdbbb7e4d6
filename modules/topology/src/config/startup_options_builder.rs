use core::time::Duration;

use crate::{
  config::{
    startup_options::{DEFAULT_BOOT_WINDOW, DEFAULT_SHUTDOWN_GRACE},
    RestartIntensity, StartupOptions, ViewPortConfig,
  },
  viewport::DriverRegistry,
};

/// Builder used to compose [`StartupOptions`].
///
/// Building never fails; the options are validated when the root starts.
#[derive(Clone, Debug)]
pub struct StartupOptionsBuilder {
  options: StartupOptions,
}

impl StartupOptionsBuilder {
  pub(crate) fn new() -> Self {
    Self {
      options: StartupOptions {
        viewports:          Vec::new(),
        drivers:            DriverRegistry::new(),
        root_intensity:     RestartIntensity::default(),
        cache_intensity:    RestartIntensity::default(),
        static_intensity:   RestartIntensity::default(),
        dynamic_intensity:  RestartIntensity::default(),
        viewport_intensity: RestartIntensity::default(),
        boot_window:        DEFAULT_BOOT_WINDOW,
        shutdown_grace:     DEFAULT_SHUTDOWN_GRACE,
      },
    }
  }

  /// Appends a boot-time ViewPort.
  #[must_use]
  pub fn viewport(mut self, config: ViewPortConfig) -> Self {
    self.options.viewports.push(config);
    self
  }

  /// Replaces the boot-time ViewPorts.
  #[must_use]
  pub fn viewports(mut self, configs: impl IntoIterator<Item = ViewPortConfig>) -> Self {
    self.options.viewports = configs.into_iter().collect();
    self
  }

  /// Sets the driver registry.
  #[must_use]
  pub fn drivers(mut self, drivers: DriverRegistry) -> Self {
    self.options.drivers = drivers;
    self
  }

  /// Sets the root coordinator's restart intensity.
  #[must_use]
  pub const fn root_intensity(mut self, intensity: RestartIntensity) -> Self {
    self.options.root_intensity = intensity;
    self
  }

  /// Sets the cache supervisor's restart intensity.
  #[must_use]
  pub const fn cache_intensity(mut self, intensity: RestartIntensity) -> Self {
    self.options.cache_intensity = intensity;
    self
  }

  /// Sets the static ViewPort supervisor's restart intensity.
  #[must_use]
  pub const fn static_intensity(mut self, intensity: RestartIntensity) -> Self {
    self.options.static_intensity = intensity;
    self
  }

  /// Sets the dynamic ViewPort supervisor's restart intensity.
  #[must_use]
  pub const fn dynamic_intensity(mut self, intensity: RestartIntensity) -> Self {
    self.options.dynamic_intensity = intensity;
    self
  }

  /// Sets the restart intensity of each ViewPort's driver supervisor.
  #[must_use]
  pub const fn viewport_intensity(mut self, intensity: RestartIntensity) -> Self {
    self.options.viewport_intensity = intensity;
    self
  }

  /// Bounds every child's init handshake.
  #[must_use]
  pub const fn boot_window(mut self, window: Duration) -> Self {
    self.options.boot_window = window;
    self
  }

  /// Sets the grace given to ViewPort subtrees during shutdown.
  #[must_use]
  pub const fn shutdown_grace(mut self, grace: Duration) -> Self {
    self.options.shutdown_grace = grace;
    self
  }

  /// Finalizes the options.
  #[must_use]
  pub fn build(self) -> StartupOptions {
    self.options
  }
}
