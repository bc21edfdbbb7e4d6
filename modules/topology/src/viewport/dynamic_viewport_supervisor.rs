use core::time::Duration;
use std::sync::Arc;

use crate::{
  config::{RestartIntensity, ViewPortConfig},
  process::{CallError, ProcessRuntime},
  registry::RegisteredName,
  supervision::{
    ChildId, ChildInfo, ChildSpec, RestartPolicy, Strategy, Supervisor, SupervisorError, SupervisorFlags,
    SupervisorHandle,
  },
  viewport::{viewport_subtree, DynamicViewPortError, ViewPortEnv, ViewPortHandle},
};

#[cfg(test)]
mod tests;

/// Runtime-managed pool of ViewPorts.
///
/// The pool starts empty and is always part of the tree. The application adds and removes ViewPorts through this
/// client, which resolves the pool by name on every request. Each member is its own subtree, restarted one-for-one
/// according to the policy passed to [`Self::add`].
#[derive(Clone)]
pub struct DynamicViewPortSupervisor {
  runtime: ProcessRuntime,
  env:     Arc<ViewPortEnv>,
  timeout: Duration,
}

impl DynamicViewPortSupervisor {
  /// Name the pool registers under.
  pub const NAME: &'static str = "scenic.viewports.dynamic";
  /// Child identifier under the root coordinator.
  pub const CHILD_ID: &'static str = "dynamic_viewports";

  pub(crate) fn new(runtime: ProcessRuntime, env: Arc<ViewPortEnv>) -> Self {
    Self { runtime, env, timeout: Duration::from_secs(10) }
  }

  /// Overrides how long requests wait for the pool.
  #[must_use]
  pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub(crate) fn child_spec(intensity: RestartIntensity, env: &Arc<ViewPortEnv>) -> ChildSpec {
    let flags = SupervisorFlags::new(Strategy::OneForOne, intensity);
    ChildSpec::supervisor(Self::CHILD_ID, move || Box::new(Supervisor::new(flags, Vec::new())))
      .with_name(Self::NAME)
      .with_init_timeout(env.boot_window())
  }

  /// Starts a ViewPort subtree for `config` under `restart`.
  ///
  /// Waits for the subtree's whole boot budget on top of the call timeout, so a slow but healthy ViewPort is not
  /// reported as failed. Names of the static pool's ViewPorts are refused even while one of them is between
  /// restarts and its name is momentarily free.
  ///
  /// # Errors
  ///
  /// Returns [`DynamicViewPortError::InvalidConfig`] on a malformed config and
  /// [`DynamicViewPortError::AlreadyStarted`] when a live process or a static ViewPort already holds the ViewPort's
  /// name. The pool's children are left unchanged on error: a start still in flight when the wait runs out is
  /// terminated before the error is returned.
  pub fn add(&self, config: ViewPortConfig, restart: RestartPolicy) -> Result<ViewPortHandle, DynamicViewPortError> {
    let name = config.name().clone();
    let id = ChildId::new(format!("{name}#{}", self.env.next_seq()));
    let spec = viewport_subtree(id.clone(), config, &self.env)?.with_restart(restart);
    if self.env.is_static(&name) || self.runtime.registry().is_registered(&name) {
      return Err(DynamicViewPortError::AlreadyStarted(name));
    }

    let wait = spec.init_timeout().saturating_add(self.timeout);
    let pool = self.handle()?.with_call_timeout(wait);
    match pool.start_child(spec) {
      | Ok(pid) => {
        tracing::info!(viewport = %name, child = %id, %pid, ?restart, "viewport added");
        Ok(ViewPortHandle::new(id, name, self.runtime.clone()))
      },
      | Err(SupervisorError::AlreadyPresent(_)) => Err(DynamicViewPortError::AlreadyStarted(name)),
      | Err(SupervisorError::StartFailed { source, .. }) if source.name_conflict().is_some() => {
        Err(DynamicViewPortError::AlreadyStarted(name))
      },
      | Err(error @ SupervisorError::Call(CallError::Timeout { .. })) => {
        match pool.terminate_child(&id) {
          | Ok(()) | Err(SupervisorError::ChildNotFound(_)) => {},
          | Err(cleanup) => tracing::warn!(viewport = %name, child = %id, %cleanup, "abandoned viewport left running"),
        }
        Err(error.into())
      },
      | Err(error) => Err(error.into()),
    }
  }

  /// Gracefully shuts the ViewPort down and forgets it.
  ///
  /// # Errors
  ///
  /// Returns [`DynamicViewPortError::NotFound`] when the handle is stale: the ViewPort was already removed or was
  /// dropped after a crash.
  pub fn remove(&self, handle: &ViewPortHandle) -> Result<(), DynamicViewPortError> {
    match self.handle()?.terminate_child(handle.id()) {
      | Ok(()) => {
        tracing::info!(viewport = %handle.name(), child = %handle.id(), "viewport removed");
        Ok(())
      },
      | Err(SupervisorError::ChildNotFound(id)) => Err(DynamicViewPortError::NotFound(id)),
      | Err(error) => Err(error.into()),
    }
  }

  /// ViewPort subtrees currently supervised, in start order.
  ///
  /// # Errors
  ///
  /// Returns [`DynamicViewPortError::Supervisor`] when the pool cannot be reached.
  pub fn viewports(&self) -> Result<Vec<ChildInfo>, DynamicViewPortError> {
    Ok(self.handle()?.which_children()?)
  }

  /// Number of ViewPort subtrees currently supervised.
  ///
  /// # Errors
  ///
  /// Returns [`DynamicViewPortError::Supervisor`] when the pool cannot be reached.
  pub fn count(&self) -> Result<usize, DynamicViewPortError> {
    Ok(self.handle()?.count_children()?)
  }

  fn handle(&self) -> Result<SupervisorHandle, SupervisorError> {
    let process = self.runtime.resolve(&RegisteredName::from(Self::NAME))?;
    Ok(SupervisorHandle::new(process).with_call_timeout(self.timeout))
  }
}
