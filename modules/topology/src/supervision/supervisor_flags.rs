use crate::{
  config::RestartIntensity,
  supervision::{AutoShutdown, Strategy},
};

/// Strategy, escalation ceiling and auto-shutdown mode of one supervisor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SupervisorFlags {
  strategy:      Strategy,
  intensity:     RestartIntensity,
  auto_shutdown: AutoShutdown,
}

impl SupervisorFlags {
  /// Creates flags that never auto-shut down.
  #[must_use]
  pub const fn new(strategy: Strategy, intensity: RestartIntensity) -> Self {
    Self { strategy, intensity, auto_shutdown: AutoShutdown::Never }
  }

  /// Overrides the auto-shutdown mode.
  #[must_use]
  pub const fn with_auto_shutdown(mut self, auto_shutdown: AutoShutdown) -> Self {
    self.auto_shutdown = auto_shutdown;
    self
  }

  /// Restart strategy.
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.strategy
  }

  /// Escalation ceiling.
  #[must_use]
  pub const fn intensity(&self) -> RestartIntensity {
    self.intensity
  }

  /// Auto-shutdown mode.
  #[must_use]
  pub const fn auto_shutdown(&self) -> AutoShutdown {
    self.auto_shutdown
  }
}
