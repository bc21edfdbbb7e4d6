use core::{
  fmt::{Debug, Formatter, Result as FmtResult},
  time::Duration,
};
use std::sync::Arc;

use crate::{
  cache::{CacheClass, CacheClient},
  lookup::LookupTableClient,
  process::{ExitReason, Pid, ProcessHandle, ProcessRuntime},
  root::TreeShape,
  supervision::{ChildInfo, SupervisorError, SupervisorHandle},
  viewport::{DynamicViewPortSupervisor, StaticViewPortSupervisor, ViewPortEnv},
};

/// Handle to a running root coordinator.
///
/// Exhausting the root's restart intensity terminates the whole tree; [`Self::is_alive`] and
/// [`Self::wait_for_exit`] make that observable.
#[derive(Clone)]
pub struct RootHandle {
  runtime: ProcessRuntime,
  process: ProcessHandle,
  shape:   TreeShape,
  env:     Arc<ViewPortEnv>,
}

impl RootHandle {
  pub(crate) const fn new(
    runtime: ProcessRuntime,
    process: ProcessHandle,
    shape: TreeShape,
    env: Arc<ViewPortEnv>,
  ) -> Self {
    Self { runtime, process, shape, env }
  }

  /// Root process identifier.
  #[must_use]
  pub fn pid(&self) -> Pid {
    self.process.pid()
  }

  /// Root process.
  #[must_use]
  pub const fn process(&self) -> &ProcessHandle {
    &self.process
  }

  /// Runtime hosting the tree.
  #[must_use]
  pub const fn runtime(&self) -> &ProcessRuntime {
    &self.runtime
  }

  /// Shape chosen at start.
  #[must_use]
  pub const fn shape(&self) -> &TreeShape {
    &self.shape
  }

  /// Top-level children in start order.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::Call`] when the root is not running.
  pub fn children(&self) -> Result<Vec<ChildInfo>, SupervisorError> {
    SupervisorHandle::new(self.process.clone()).which_children()
  }

  /// Client of the static pool, `None` when no ViewPort was configured at boot.
  #[must_use]
  pub fn static_viewports(&self) -> Option<StaticViewPortSupervisor> {
    self.shape.has_static().then(|| StaticViewPortSupervisor::new(self.runtime.clone()))
  }

  /// Client of the dynamic pool.
  #[must_use]
  pub fn dynamic_viewports(&self) -> DynamicViewPortSupervisor {
    DynamicViewPortSupervisor::new(self.runtime.clone(), Arc::clone(&self.env))
  }

  /// Client of the shared lookup table.
  #[must_use]
  pub fn lookup_table(&self) -> LookupTableClient {
    LookupTableClient::new(self.runtime.clone())
  }

  /// Client of the cache store of `class`.
  #[must_use]
  pub fn cache(&self, class: CacheClass) -> CacheClient {
    CacheClient::new(self.runtime.clone(), class)
  }

  /// Whether the root still runs.
  #[must_use]
  pub fn is_alive(&self) -> bool {
    self.process.is_alive()
  }

  /// Exit reason once the root terminated.
  #[must_use]
  pub fn exit_reason(&self) -> Option<ExitReason> {
    self.process.exit_reason()
  }

  /// Blocks until the root terminates or `timeout` elapses.
  #[must_use]
  pub fn wait_for_exit(&self, timeout: Duration) -> Option<ExitReason> {
    self.process.wait_for_exit(timeout)
  }

  /// Stops the tree, children in reverse start order, and waits up to `timeout` for it.
  ///
  /// Returns the root's exit reason, or `None` when the tree did not finish stopping in time.
  pub fn shutdown(&self, timeout: Duration) -> Option<ExitReason> {
    tracing::info!(pid = %self.pid(), "root coordinator shutting down");
    self.process.stop();
    self.process.wait_for_exit(timeout)
  }
}

impl Debug for RootHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("RootHandle").field("process", &self.process).field("shape", &self.shape).finish_non_exhaustive()
  }
}
