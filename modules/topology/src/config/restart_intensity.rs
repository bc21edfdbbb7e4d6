use core::time::Duration;

#[cfg(test)]
mod tests;

/// Escalation ceiling of a supervisor: at most `max_restarts` restarts within `within`.
///
/// One more restart inside the window makes the supervisor give up and terminate with
/// [`ExitReason::MaxRestartIntensity`](crate::process::ExitReason::MaxRestartIntensity), handing the failure to its
/// own parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RestartIntensity {
  max_restarts: u32,
  within:       Duration,
}

impl RestartIntensity {
  /// Creates an intensity.
  #[must_use]
  pub const fn new(max_restarts: u32, within: Duration) -> Self {
    Self { max_restarts, within }
  }

  /// Intensity that never restarts locally and escalates the first failure.
  #[must_use]
  pub const fn escalate_immediately() -> Self {
    Self { max_restarts: 0, within: Duration::from_secs(1) }
  }

  /// Restarts allowed inside the window.
  #[must_use]
  pub const fn max_restarts(&self) -> u32 {
    self.max_restarts
  }

  /// Length of the sliding window.
  #[must_use]
  pub const fn within(&self) -> Duration {
    self.within
  }
}

impl Default for RestartIntensity {
  fn default() -> Self {
    Self { max_restarts: 3, within: Duration::from_secs(5) }
  }
}
