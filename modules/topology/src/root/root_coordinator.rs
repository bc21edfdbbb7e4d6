use crate::{
  config::StartupOptions,
  process::{ProcessError, ProcessRuntime, SpawnError, SpawnOptions},
  registry::{RegisteredName, RegistryError},
  root::{RootHandle, StartupError, TreeShape},
  supervision::{ChildSpec, Strategy, Supervisor, SupervisorFlags},
  viewport::ViewPortEnv,
};

#[cfg(test)]
mod tests;

/// Entry point of the topology.
///
/// The root is a one-for-one supervisor registered as [`RootCoordinator::NAME`]. It starts, in order, the lookup
/// table, the cache subtree, the static ViewPort pool when boot-time ViewPorts are configured, and the dynamic
/// ViewPort pool. It manages lifecycle only and carries no application state.
pub struct RootCoordinator;

impl RootCoordinator {
  /// Name the root registers under.
  pub const NAME: &'static str = "scenic";

  /// Boots the tree in `runtime`.
  ///
  /// Blocks until every child finished its init handshake or the boot fails. The root waits one boot window of its
  /// own plus the init budget of each child it starts.
  ///
  /// # Errors
  ///
  /// Returns [`StartupError::InvalidConfig`] on malformed options, [`StartupError::AlreadyStarted`] when a root
  /// already runs in `runtime`, and [`StartupError::ChildStartFailed`] when a child does not come up within its
  /// boot window.
  pub fn start(runtime: &ProcessRuntime, options: StartupOptions) -> Result<RootHandle, StartupError> {
    options.validate()?;
    let name = RegisteredName::from(Self::NAME);
    if let Ok(holder) = runtime.resolve(&name) {
      return Err(StartupError::AlreadyStarted { holder: holder.pid() });
    }

    let shape = TreeShape::from_viewports(options.viewports());
    let env = ViewPortEnv::from_options(&options);
    let children = shape.child_specs(&options, &env)?;
    let flags = SupervisorFlags::new(Strategy::OneForOne, options.root_intensity());
    let boot_window = ChildSpec::boot_budget(&children, options.boot_window());

    let spawn_options = SpawnOptions::new().with_name(name).with_init_timeout(boot_window);
    let process = runtime.spawn(Box::new(Supervisor::new(flags, children)), spawn_options).map_err(startup_error)?;
    tracing::info!(
      pid = %process.pid(),
      children = shape.child_count(),
      static_viewports = shape.viewports().len(),
      "root coordinator started"
    );
    Ok(RootHandle::new(runtime.clone(), process, shape, env))
  }
}

fn startup_error(error: SpawnError) -> StartupError {
  tracing::error!(%error, "root coordinator failed to start");
  match error {
    | SpawnError::Registry(RegistryError::AlreadyRegistered { holder, .. }) => StartupError::AlreadyStarted { holder },
    | SpawnError::InitFailed { source: ProcessError::ChildStart { id, source }, .. } => {
      StartupError::ChildStartFailed { child: id, source: *source }
    },
    | SpawnError::InitTimeout { timeout, .. } => StartupError::BootTimeout(timeout),
    | other => StartupError::Spawn(other),
  }
}
