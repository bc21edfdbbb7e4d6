use core::time::Duration;

use crate::process::{ExitReason, ProcessHandle};

/// Grace granted to a stopped process that ignores a kill request.
const KILL_GRACE: Duration = Duration::from_millis(500);

/// How a supervisor terminates a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shutdown {
  /// Kill immediately.
  BrutalKill,
  /// Ask to stop and kill once the grace period elapses.
  Timeout(Duration),
  /// Ask to stop and wait as long as it takes; meant for nested supervisors.
  Infinity,
}

impl Shutdown {
  /// Terminates `handle`, returning its exit reason unless it could not be observed in time.
  pub(crate) fn terminate(self, handle: &ProcessHandle) -> Option<ExitReason> {
    match self {
      | Shutdown::BrutalKill => {
        handle.kill();
        handle.wait_for_exit(KILL_GRACE)
      },
      | Shutdown::Timeout(grace) => {
        handle.stop();
        if let Some(reason) = handle.wait_for_exit(grace) {
          return Some(reason);
        }
        tracing::warn!(pid = %handle.pid(), ?grace, "child ignored shutdown, killing");
        handle.kill();
        handle.wait_for_exit(KILL_GRACE)
      },
      | Shutdown::Infinity => {
        handle.stop();
        Some(handle.join())
      },
    }
  }
}
