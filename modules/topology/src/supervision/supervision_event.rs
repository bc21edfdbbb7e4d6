use crate::{
  process::{ExitReason, Pid},
  supervision::ChildId,
};

/// Lifecycle events emitted by supervisors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupervisionEvent {
  /// A child was started for the first time.
  ChildStarted {
    /// Supervisor owning the child.
    supervisor: Pid,
    /// Child identifier.
    child:      ChildId,
    /// New incarnation.
    pid:        Pid,
  },
  /// A child terminated on its own.
  ChildExited {
    /// Supervisor owning the child.
    supervisor: Pid,
    /// Child identifier.
    child:      ChildId,
    /// Terminated incarnation.
    pid:        Pid,
    /// Reported exit reason.
    reason:     ExitReason,
  },
  /// A child was started again after an exit.
  ChildRestarted {
    /// Supervisor owning the child.
    supervisor: Pid,
    /// Child identifier.
    child:      ChildId,
    /// New incarnation.
    pid:        Pid,
  },
  /// A child was terminated on request of the supervisor's owner.
  ChildTerminated {
    /// Supervisor owning the child.
    supervisor: Pid,
    /// Child identifier.
    child:      ChildId,
  },
  /// A supervisor gave up and is escalating to its parent.
  RestartIntensityExceeded {
    /// Supervisor that gave up.
    supervisor: Pid,
  },
}
