use core::time::Duration;
use std::{
  collections::HashSet,
  sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
  },
};

use crate::{
  config::{RestartIntensity, StartupOptions},
  registry::RegisteredName,
  viewport::DriverRegistry,
};

/// Settings shared by every ViewPort subtree of one root, static and dynamic alike.
#[derive(Debug)]
pub(crate) struct ViewPortEnv {
  drivers:            DriverRegistry,
  viewport_intensity: RestartIntensity,
  boot_window:        Duration,
  shutdown_grace:     Duration,
  static_names:       HashSet<RegisteredName>,
  next_seq:           AtomicU64,
}

impl ViewPortEnv {
  pub(crate) fn new(
    drivers: DriverRegistry,
    viewport_intensity: RestartIntensity,
    boot_window: Duration,
    shutdown_grace: Duration,
  ) -> Arc<Self> {
    Self::with_static_names(drivers, viewport_intensity, boot_window, shutdown_grace, HashSet::new())
  }

  pub(crate) fn with_static_names(
    drivers: DriverRegistry,
    viewport_intensity: RestartIntensity,
    boot_window: Duration,
    shutdown_grace: Duration,
    static_names: HashSet<RegisteredName>,
  ) -> Arc<Self> {
    Arc::new(Self {
      drivers,
      viewport_intensity,
      boot_window,
      shutdown_grace,
      static_names,
      next_seq: AtomicU64::new(1),
    })
  }

  pub(crate) fn from_options(options: &StartupOptions) -> Arc<Self> {
    Self::with_static_names(
      options.drivers().clone(),
      options.viewport_intensity(),
      options.boot_window(),
      options.shutdown_grace(),
      options.viewports().iter().map(|config| config.name().clone()).collect(),
    )
  }

  pub(crate) const fn drivers(&self) -> &DriverRegistry {
    &self.drivers
  }

  pub(crate) const fn viewport_intensity(&self) -> RestartIntensity {
    self.viewport_intensity
  }

  pub(crate) const fn boot_window(&self) -> Duration {
    self.boot_window
  }

  pub(crate) const fn shutdown_grace(&self) -> Duration {
    self.shutdown_grace
  }

  /// Whether `name` belongs to a ViewPort of the static pool, running or between restarts.
  pub(crate) fn is_static(&self, name: &RegisteredName) -> bool {
    self.static_names.contains(name)
  }

  /// Sequence number making every dynamic child identifier unique, so handles to removed ViewPorts stay stale.
  pub(crate) fn next_seq(&self) -> u64 {
    self.next_seq.fetch_add(1, Ordering::Relaxed)
  }
}
