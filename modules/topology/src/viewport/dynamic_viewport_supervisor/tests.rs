use core::time::Duration;
use std::{collections::HashSet, sync::Arc, thread};

use crate::{
  config::{ConfigError, DriverConfig, RestartIntensity, ViewPortConfig},
  process::{Process, ProcessContext, ProcessError, ProcessRuntime, SpawnOptions},
  registry::{RegisteredName, RegistryError},
  supervision::{RestartPolicy, Strategy, Supervisor, SupervisorError, SupervisorFlags},
  test_support::{eventually, WAIT},
  viewport::{DriverRegistry, DynamicViewPortError, DynamicViewPortSupervisor, ViewPortEnv},
};

struct SlowDriver;

impl Process for SlowDriver {
  fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    thread::sleep(Duration::from_millis(300));
    Ok(())
  }
}

fn env() -> Arc<ViewPortEnv> {
  let grace = Duration::from_millis(500);
  ViewPortEnv::new(DriverRegistry::new(), RestartIntensity::default(), Duration::from_secs(1), grace)
}

fn start() -> (ProcessRuntime, DynamicViewPortSupervisor) {
  start_with(env())
}

fn start_with(env: Arc<ViewPortEnv>) -> (ProcessRuntime, DynamicViewPortSupervisor) {
  let runtime = ProcessRuntime::new();
  let flags = SupervisorFlags::new(Strategy::OneForOne, RestartIntensity::default());
  let pool = DynamicViewPortSupervisor::child_spec(RestartIntensity::default(), &env);
  runtime.spawn(Box::new(Supervisor::new(flags, vec![pool])), SpawnOptions::new()).expect("host starts");
  let client = DynamicViewPortSupervisor::new(runtime.clone(), env);
  (runtime, client)
}

fn config(name: &str) -> ViewPortConfig {
  ViewPortConfig::builder(name).size(800, 600).build().expect("valid config")
}

#[test]
fn pool_starts_empty() {
  let (_runtime, pool) = start();

  assert_eq!(Ok(0), pool.count());
}

#[test]
fn add_then_remove() {
  let (runtime, pool) = start();

  let handle = pool.add(config("main"), RestartPolicy::Permanent).expect("added");

  assert_eq!(&RegisteredName::new("main"), handle.name());
  assert_eq!(Ok(1), pool.count());
  assert_eq!(800, handle.info(WAIT).expect("info").size.width);

  pool.remove(&handle).expect("removed");

  assert_eq!(Ok(0), pool.count());
  assert!(runtime.resolve(&RegisteredName::new("main")).is_err());
  assert_eq!(Err(DynamicViewPortError::NotFound(handle.id().clone())), pool.remove(&handle));
}

#[test]
fn colliding_name_is_rejected_without_changing_children() {
  let (_runtime, pool) = start();
  pool.add(config("main"), RestartPolicy::Permanent).expect("added");
  let before = pool.viewports().expect("children");

  let error = pool.add(config("main"), RestartPolicy::Temporary).expect_err("name taken");

  assert_eq!(DynamicViewPortError::AlreadyStarted(RegisteredName::new("main")), error);
  assert_eq!(Ok(before), pool.viewports());
}

#[test]
fn colliding_with_foreign_registration_is_rejected() {
  let (runtime, pool) = start();
  let other = pool.add(config("other"), RestartPolicy::Permanent).expect("added");
  let holder = other.process().expect("running");
  runtime.registry().register(RegisteredName::new("main"), holder).expect("register alias");

  let error = pool.add(config("main"), RestartPolicy::Permanent).expect_err("name taken");

  assert_eq!(DynamicViewPortError::AlreadyStarted(RegisteredName::new("main")), error);
  assert_eq!(Ok(1), pool.count());
}

#[test]
fn invalid_config_is_rejected() {
  let (_runtime, pool) = start();
  let broken: ViewPortConfig =
    serde_json::from_str(r#"{ "name": "main", "size": { "width": 0, "height": 10 } }"#).expect("json");

  let error = pool.add(broken, RestartPolicy::Permanent).expect_err("invalid");

  assert_eq!(
    DynamicViewPortError::InvalidConfig(ConfigError::InvalidSize { name: "main".into(), width: 0, height: 10 }),
    error
  );
  assert_eq!(Ok(0), pool.count());
}

#[test]
fn permanent_viewport_is_restarted_under_its_name() {
  let (_runtime, pool) = start();
  let handle = pool.add(config("main"), RestartPolicy::Permanent).expect("added");
  let first = handle.process().expect("running");

  first.kill();

  assert!(eventually(|| handle.process().is_ok_and(|current| current.pid() != first.pid())));
  assert_eq!(Ok(1), pool.count());
}

#[test]
fn temporary_viewport_is_forgotten_after_crash() {
  let (_runtime, pool) = start();
  let handle = pool.add(config("side"), RestartPolicy::Temporary).expect("added");

  handle.process().expect("running").kill();

  assert!(eventually(|| pool.count() == Ok(0)));
  assert_eq!(Err(RegistryError::NotFound(RegisteredName::new("side"))), handle.process().map(|process| process.pid()));
  assert_eq!(Err(DynamicViewPortError::NotFound(handle.id().clone())), pool.remove(&handle));
}

#[test]
fn requests_fail_when_pool_is_not_running() {
  let pool = DynamicViewPortSupervisor::new(ProcessRuntime::new(), env());

  assert_eq!(
    Err(DynamicViewPortError::Supervisor(SupervisorError::Unavailable(RegistryError::NotFound(RegisteredName::new(
      DynamicViewPortSupervisor::NAME
    ))))),
    pool.count()
  );
}

#[test]
fn slow_viewport_is_added_past_the_call_timeout() {
  let drivers = DriverRegistry::new().with_driver("slow", |_, _| -> Box<dyn Process> { Box::new(SlowDriver) });
  let env = ViewPortEnv::new(drivers, RestartIntensity::default(), Duration::from_secs(20), Duration::from_millis(500));
  let (runtime, pool) = start_with(env);
  let pool = pool.with_call_timeout(Duration::from_millis(100));
  let config =
    ViewPortConfig::builder("main").size(10, 10).driver(DriverConfig::new("slow", "out")).build().expect("config");

  let handle = pool.add(config, RestartPolicy::Permanent).expect("added despite the short call timeout");

  assert_eq!(Ok(1), pool.count());
  pool.remove(&handle).expect("removed");
  assert_eq!(Ok(0), pool.count());
  assert!(runtime.resolve(&RegisteredName::new("main")).is_err());
}

#[test]
fn static_viewport_names_are_refused() {
  let grace = Duration::from_millis(500);
  let reserved = HashSet::from([RegisteredName::new("main")]);
  let env = ViewPortEnv::with_static_names(
    DriverRegistry::new(),
    RestartIntensity::default(),
    Duration::from_secs(1),
    grace,
    reserved,
  );
  let (runtime, pool) = start_with(env);
  assert!(runtime.resolve(&RegisteredName::new("main")).is_err());

  let error = pool.add(config("main"), RestartPolicy::Permanent).expect_err("name reserved");

  assert_eq!(DynamicViewPortError::AlreadyStarted(RegisteredName::new("main")), error);
  assert_eq!(Ok(0), pool.count());
  pool.add(config("other"), RestartPolicy::Permanent).expect("free name added");
}
