use crate::{
  process::Pid,
  supervision::{ChildId, ChildKind, RestartPolicy},
};

/// Snapshot of one child as reported by
/// [`SupervisorHandle::which_children`](crate::supervision::SupervisorHandle::which_children).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildInfo {
  id:      ChildId,
  pid:     Option<Pid>,
  kind:    ChildKind,
  restart: RestartPolicy,
}

impl ChildInfo {
  pub(crate) const fn new(id: ChildId, pid: Option<Pid>, kind: ChildKind, restart: RestartPolicy) -> Self {
    Self { id, pid, kind, restart }
  }

  /// Child identifier.
  #[must_use]
  pub const fn id(&self) -> &ChildId {
    &self.id
  }

  /// Current incarnation, `None` while the child is not running.
  #[must_use]
  pub const fn pid(&self) -> Option<Pid> {
    self.pid
  }

  /// Worker or supervisor.
  #[must_use]
  pub const fn kind(&self) -> ChildKind {
    self.kind
  }

  /// Restart policy.
  #[must_use]
  pub const fn restart(&self) -> RestartPolicy {
    self.restart
  }
}
