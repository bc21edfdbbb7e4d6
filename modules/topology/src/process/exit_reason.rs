use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::process::ProcessError;

#[cfg(test)]
mod tests;

/// Why a process stopped running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitReason {
  /// The process finished its work.
  Normal,
  /// The process was asked to stop by its owner.
  Shutdown,
  /// The process was terminated without running further messages.
  Killed,
  /// The process failed or panicked.
  Crashed(String),
  /// A supervisor gave up after too many restarts in its window.
  MaxRestartIntensity,
}

impl ExitReason {
  /// Builds a crash reason.
  #[must_use]
  pub fn crashed(reason: impl Into<String>) -> Self {
    ExitReason::Crashed(reason.into())
  }

  /// Normal and shutdown exits are expected; everything else is abnormal.
  #[must_use]
  pub const fn is_normal(&self) -> bool {
    matches!(self, ExitReason::Normal | ExitReason::Shutdown)
  }

  /// Negation of [`Self::is_normal`].
  #[must_use]
  pub const fn is_abnormal(&self) -> bool {
    !self.is_normal()
  }
}

impl Display for ExitReason {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      | ExitReason::Normal => f.write_str("normal"),
      | ExitReason::Shutdown => f.write_str("shutdown"),
      | ExitReason::Killed => f.write_str("killed"),
      | ExitReason::Crashed(reason) => write!(f, "crashed: {reason}"),
      | ExitReason::MaxRestartIntensity => f.write_str("reached max restart intensity"),
    }
  }
}

impl From<ProcessError> for ExitReason {
  fn from(error: ProcessError) -> Self {
    match error {
      | ProcessError::RestartIntensityExceeded => ExitReason::MaxRestartIntensity,
      | other => ExitReason::Crashed(other.to_string()),
    }
  }
}
