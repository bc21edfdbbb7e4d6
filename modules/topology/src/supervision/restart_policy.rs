use crate::process::ExitReason;

#[cfg(test)]
mod tests;

/// When a supervisor restarts a terminated child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RestartPolicy {
  /// Always restarted.
  #[default]
  Permanent,
  /// Never restarted; removed from its supervisor once it exits.
  Temporary,
  /// Restarted only after an abnormal exit.
  Transient,
}

impl RestartPolicy {
  /// Decides whether a child that exited with `reason` must be restarted.
  #[must_use]
  pub const fn should_restart(self, reason: &ExitReason) -> bool {
    match self {
      | RestartPolicy::Permanent => true,
      | RestartPolicy::Temporary => false,
      | RestartPolicy::Transient => reason.is_abnormal(),
    }
  }
}
