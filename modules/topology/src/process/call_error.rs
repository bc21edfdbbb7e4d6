use core::time::Duration;

use crate::process::Pid;

/// Errors returned by synchronous requests to a process.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
  /// The target already terminated.
  #[error("process {0} is not running")]
  NotRunning(Pid),
  /// No reply arrived in time.
  #[error("call to {pid} timed out after {timeout:?}")]
  Timeout {
    /// Target process.
    pid:     Pid,
    /// Elapsed wait.
    timeout: Duration,
  },
  /// The target terminated before replying.
  #[error("process {0} exited before replying")]
  Exited(Pid),
  /// The reply did not have the expected type.
  #[error("process {0} replied with an unexpected payload")]
  UnexpectedReply(Pid),
}
