use core::{
  fmt::{Debug, Formatter, Result as FmtResult},
  time::Duration,
};
use std::sync::Arc;

use crate::{
  process::{Process, ProcessContext, ProcessHandle, SpawnError, SpawnOptions},
  registry::RegisteredName,
  supervision::{ChildId, ChildKind, RestartPolicy, Shutdown},
};

#[cfg(test)]
mod tests;

const DEFAULT_WORKER_SHUTDOWN: Duration = Duration::from_secs(5);
const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds a fresh process instance each time the child is (re)started.
pub type StartFn = Arc<dyn Fn() -> Box<dyn Process> + Send + Sync>;

/// Declarative description of one supervised child.
///
/// The supervisor keeps the spec for the child's whole life, so restarts always rebuild the process from the same
/// inputs.
#[derive(Clone)]
pub struct ChildSpec {
  id:           ChildId,
  start:        StartFn,
  kind:         ChildKind,
  restart:      RestartPolicy,
  shutdown:     Shutdown,
  name:         Option<RegisteredName>,
  init_timeout: Duration,
  significant:  bool,
}

impl ChildSpec {
  /// Permanent worker with a bounded shutdown grace.
  #[must_use]
  pub fn worker<F>(id: impl Into<ChildId>, start: F) -> Self
  where
    F: Fn() -> Box<dyn Process> + Send + Sync + 'static, {
    Self::with_kind(id.into(), Arc::new(start), ChildKind::Worker, Shutdown::Timeout(DEFAULT_WORKER_SHUTDOWN))
  }

  /// Permanent nested supervisor, waited for until its own children are down.
  #[must_use]
  pub fn supervisor<F>(id: impl Into<ChildId>, start: F) -> Self
  where
    F: Fn() -> Box<dyn Process> + Send + Sync + 'static, {
    Self::with_kind(id.into(), Arc::new(start), ChildKind::Supervisor, Shutdown::Infinity)
  }

  fn with_kind(id: ChildId, start: StartFn, kind: ChildKind, shutdown: Shutdown) -> Self {
    Self {
      id,
      start,
      kind,
      restart: RestartPolicy::Permanent,
      shutdown,
      name: None,
      init_timeout: DEFAULT_INIT_TIMEOUT,
      significant: false,
    }
  }

  /// Overrides the restart policy.
  #[must_use]
  pub const fn with_restart(mut self, restart: RestartPolicy) -> Self {
    self.restart = restart;
    self
  }

  /// Overrides the shutdown behaviour.
  #[must_use]
  pub const fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
    self.shutdown = shutdown;
    self
  }

  /// Registers every incarnation of the child under `name`.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<RegisteredName>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Bounds the child's `init` handshake.
  #[must_use]
  pub const fn with_init_timeout(mut self, timeout: Duration) -> Self {
    self.init_timeout = timeout;
    self
  }

  /// Marks the child as significant for [`AutoShutdown`](crate::supervision::AutoShutdown).
  #[must_use]
  pub const fn with_significant(mut self, significant: bool) -> Self {
    self.significant = significant;
    self
  }

  /// Child identifier.
  #[must_use]
  pub const fn id(&self) -> &ChildId {
    &self.id
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

  /// Shutdown behaviour.
  #[must_use]
  pub const fn shutdown(&self) -> Shutdown {
    self.shutdown
  }

  /// Registered name, if any.
  #[must_use]
  pub const fn name(&self) -> Option<&RegisteredName> {
    self.name.as_ref()
  }

  /// Boot window of the child.
  #[must_use]
  pub const fn init_timeout(&self) -> Duration {
    self.init_timeout
  }

  /// Whether the child is significant.
  #[must_use]
  pub const fn significant(&self) -> bool {
    self.significant
  }

  /// Init window of a supervisor starting `children` in sequence: one `window` of its own plus every child's.
  pub(crate) fn boot_budget(children: &[ChildSpec], window: Duration) -> Duration {
    children.iter().fold(window, |budget, child| budget.saturating_add(child.init_timeout))
  }

  pub(crate) fn spawn(&self, ctx: &ProcessContext) -> Result<ProcessHandle, SpawnError> {
    let mut options = SpawnOptions::new().with_init_timeout(self.init_timeout);
    if let Some(name) = &self.name {
      options = options.with_name(name.clone());
    }
    ctx.spawn_link((self.start)(), options)
  }
}

impl Debug for ChildSpec {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("ChildSpec")
      .field("id", &self.id)
      .field("kind", &self.kind)
      .field("restart", &self.restart)
      .field("shutdown", &self.shutdown)
      .field("name", &self.name)
      .field("init_timeout", &self.init_timeout)
      .field("significant", &self.significant)
      .finish_non_exhaustive()
  }
}
