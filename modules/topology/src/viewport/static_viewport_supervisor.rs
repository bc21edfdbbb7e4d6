use core::time::Duration;
use std::sync::Arc;

use crate::{
  config::{ConfigError, RestartIntensity, ViewPortConfig},
  process::ProcessRuntime,
  registry::RegisteredName,
  supervision::{ChildInfo, ChildSpec, Strategy, Supervisor, SupervisorError, SupervisorFlags, SupervisorHandle},
  viewport::{viewport_subtree, ViewPortEnv},
};

/// Pool of the ViewPorts declared in the startup options.
///
/// Each configured ViewPort is a permanent child, started in declaration order; nothing is added or removed at
/// runtime. The value itself is a client that resolves the pool by name on every request.
#[derive(Clone)]
pub struct StaticViewPortSupervisor {
  runtime: ProcessRuntime,
  timeout: Duration,
}

impl StaticViewPortSupervisor {
  /// Name the pool registers under.
  pub const NAME: &'static str = "scenic.viewports.static";
  /// Child identifier under the root coordinator.
  pub const CHILD_ID: &'static str = "static_viewports";

  pub(crate) fn new(runtime: ProcessRuntime) -> Self {
    Self { runtime, timeout: Duration::from_secs(10) }
  }

  /// Overrides how long requests wait for the pool.
  #[must_use]
  pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Builds the pool's child spec, one subtree per config.
  ///
  /// Child identifiers are the ViewPort names, so restarts keep the same config and identity. The pool boots its
  /// subtrees one after another, so its init window covers all of their budgets.
  pub(crate) fn child_spec(
    configs: &[ViewPortConfig],
    intensity: RestartIntensity,
    env: &Arc<ViewPortEnv>,
  ) -> Result<ChildSpec, ConfigError> {
    let children = configs
      .iter()
      .map(|config| viewport_subtree(config.name().as_str().into(), config.clone(), env))
      .collect::<Result<Vec<_>, _>>()?;
    let budget = ChildSpec::boot_budget(&children, env.boot_window());
    let flags = SupervisorFlags::new(Strategy::OneForOne, intensity);
    Ok(
      ChildSpec::supervisor(Self::CHILD_ID, move || Box::new(Supervisor::new(flags, children.clone())))
        .with_name(Self::NAME)
        .with_init_timeout(budget),
    )
  }

  /// Supervisor client of the running pool.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::Unavailable`] when the pool is not running.
  pub fn handle(&self) -> Result<SupervisorHandle, SupervisorError> {
    let process = self.runtime.resolve(&RegisteredName::from(Self::NAME))?;
    Ok(SupervisorHandle::new(process).with_call_timeout(self.timeout))
  }

  /// ViewPort subtrees in start order.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError`] when the pool cannot be reached.
  pub fn viewports(&self) -> Result<Vec<ChildInfo>, SupervisorError> {
    self.handle()?.which_children()
  }

  /// Number of running ViewPort subtrees.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError`] when the pool cannot be reached.
  pub fn count(&self) -> Result<usize, SupervisorError> {
    self.handle()?.count_children()
  }
}
