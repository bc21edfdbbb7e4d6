use std::sync::Arc;

use crate::{
  config::{ConfigError, RestartIntensity, ViewPortConfig},
  supervision::{
    AutoShutdown, ChildId, ChildSpec, RestartPolicy, Shutdown, Strategy, Supervisor, SupervisorFlags,
  },
  viewport::{ViewPort, ViewPortEnv},
};


pub(crate) const WORKER_ID: &str = "viewport";
pub(crate) const DRIVERS_ID: &str = "drivers";

/// Child spec of a whole ViewPort subtree: the worker plus a one-for-one supervisor of its drivers.
///
/// The subtree restarts nothing itself. A crashing worker (or a driver supervisor out of restarts) terminates the
/// subtree abnormally so the owning pool applies the ViewPort's own restart policy; a worker finishing normally
/// shuts the subtree down normally. The returned spec is permanent with a bounded shutdown grace.
///
/// Every leaf gets the boot window; each supervisor above them waits one window of its own plus the budgets of the
/// children it starts in sequence.
pub(crate) fn viewport_subtree(
  id: ChildId,
  config: ViewPortConfig,
  env: &Arc<ViewPortEnv>,
) -> Result<ChildSpec, ConfigError> {
  config.validate()?;
  env.drivers().check(&config)?;

  let children = vec![worker_spec(&config, env), drivers_spec(&config, env)?];
  let budget = ChildSpec::boot_budget(&children, env.boot_window());
  let flags = SupervisorFlags::new(Strategy::OneForAll, RestartIntensity::escalate_immediately())
    .with_auto_shutdown(AutoShutdown::AnySignificant);
  Ok(
    ChildSpec::supervisor(id, move || Box::new(Supervisor::new(flags, children.clone())))
      .with_shutdown(Shutdown::Timeout(env.shutdown_grace()))
      .with_init_timeout(budget),
  )
}

fn worker_spec(config: &ViewPortConfig, env: &ViewPortEnv) -> ChildSpec {
  let name = config.name().clone();
  let config = config.clone();
  ChildSpec::worker(WORKER_ID, move || Box::new(ViewPort::new(config.clone())))
    .with_name(name)
    .with_restart(RestartPolicy::Transient)
    .with_significant(true)
    .with_shutdown(Shutdown::Timeout(env.shutdown_grace()))
    .with_init_timeout(env.boot_window())
}

fn drivers_spec(config: &ViewPortConfig, env: &ViewPortEnv) -> Result<ChildSpec, ConfigError> {
  let mut drivers = Vec::with_capacity(config.drivers().len());
  for driver in config.drivers() {
    let factory = env.drivers().factory(driver.module()).ok_or_else(|| ConfigError::UnknownDriverModule {
      viewport: config.name().clone(),
      module:   driver.module().to_owned(),
    })?;
    let viewport = config.name().clone();
    let descriptor = driver.clone();
    drivers.push(
      ChildSpec::worker(driver.name(), move || factory.start(&viewport, &descriptor))
        .with_shutdown(Shutdown::Timeout(env.shutdown_grace()))
        .with_init_timeout(env.boot_window()),
    );
  }
  let budget = ChildSpec::boot_budget(&drivers, env.boot_window());
  let flags = SupervisorFlags::new(Strategy::OneForOne, env.viewport_intensity());
  Ok(
    ChildSpec::supervisor(DRIVERS_ID, move || Box::new(Supervisor::new(flags, drivers.clone())))
      .with_init_timeout(budget),
  )
}
