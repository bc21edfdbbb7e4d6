use core::time::Duration;

use crate::{
  config::{ConfigError, DriverConfig, RestartIntensity, StartupOptions, ViewPortConfig},
  lookup::LookupTable,
  process::{ExitReason, Process, ProcessContext, ProcessError, ProcessRuntime, SpawnError},
  registry::RegisteredName,
  root::{RootCoordinator, StartupError, TreeShape},
  test_support::{eventually, FailingInit, WAIT},
  viewport::DriverRegistry,
};

fn names(runtime: &ProcessRuntime) -> Vec<String> {
  runtime.registry().names().iter().map(ToString::to_string).collect()
}

#[test]
fn minimal_root_registers_infrastructure_names() {
  let runtime = ProcessRuntime::new();

  let root = RootCoordinator::start(&runtime, StartupOptions::default()).expect("root starts");

  assert_eq!(&TreeShape::Minimal, root.shape());
  let ids: Vec<String> = root.children().expect("children").iter().map(|child| child.id().to_string()).collect();
  assert_eq!(vec!["viewport_tables", "cache", "dynamic_viewports"], ids);
  assert_eq!(
    vec![
      "scenic",
      "scenic.cache",
      "scenic.cache.static",
      "scenic.cache.stream",
      "scenic.viewport_tables",
      "scenic.viewports.dynamic"
    ],
    names(&runtime)
  );
  assert!(root.static_viewports().is_none());
  assert_eq!(Ok(0), root.dynamic_viewports().count());
}

#[test]
fn second_root_in_same_runtime_is_rejected() {
  let runtime = ProcessRuntime::new();
  let root = RootCoordinator::start(&runtime, StartupOptions::default()).expect("root starts");

  let error = RootCoordinator::start(&runtime, StartupOptions::default()).expect_err("already started");

  assert_eq!(StartupError::AlreadyStarted { holder: root.pid() }, error);
  assert!(root.is_alive());
}

#[test]
fn invalid_options_start_nothing() {
  let runtime = ProcessRuntime::new();
  let viewport = ViewPortConfig::builder("main").size(10, 10).build().expect("valid config");
  let options = StartupOptions::builder().viewports([viewport.clone(), viewport]).build();

  let error = RootCoordinator::start(&runtime, options).expect_err("duplicate viewport");

  assert_eq!(StartupError::InvalidConfig(ConfigError::DuplicateViewPort("main".into())), error);
  assert!(names(&runtime).is_empty());
}

#[test]
fn failing_static_viewport_aborts_boot_and_releases_names() {
  let runtime = ProcessRuntime::new();
  let drivers = DriverRegistry::new().with_driver("broken", |_, _| -> Box<dyn Process> { Box::new(FailingInit) });
  let viewport = ViewPortConfig::builder("main")
    .size(10, 10)
    .driver(DriverConfig::new("broken", "out"))
    .build()
    .expect("valid config");
  let options = StartupOptions::builder().viewport(viewport).drivers(drivers).build();

  let error = RootCoordinator::start(&runtime, options).expect_err("driver refuses to start");

  match error {
    | StartupError::ChildStartFailed { child, source: SpawnError::InitFailed { .. } } => {
      assert_eq!("static_viewports", child.as_str());
    },
    | other => panic!("unexpected error: {other:?}"),
  }
  assert!(eventually(|| names(&runtime).is_empty()));
}

#[test]
fn shutdown_stops_the_whole_tree() {
  let runtime = ProcessRuntime::new();
  let root = RootCoordinator::start(&runtime, StartupOptions::default()).expect("root starts");

  assert_eq!(Some(ExitReason::Shutdown), root.shutdown(WAIT));

  assert!(!root.is_alive());
  assert!(names(&runtime).is_empty());
}

#[test]
fn root_intensity_exhaustion_terminates_the_tree() {
  let runtime = ProcessRuntime::new();
  let options = StartupOptions::builder().root_intensity(RestartIntensity::escalate_immediately()).build();
  let root = RootCoordinator::start(&runtime, options).expect("root starts");

  runtime.resolve(&RegisteredName::from(LookupTable::NAME)).expect("lookup table").kill();

  assert_eq!(Some(ExitReason::MaxRestartIntensity), root.wait_for_exit(WAIT));
  assert!(eventually(|| names(&runtime).is_empty()));
}

#[test]
fn boot_window_bounds_a_hanging_child() {
  struct Hanging;

  impl Process for Hanging {
    fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
      std::thread::sleep(Duration::from_millis(400));
      Ok(())
    }
  }

  let runtime = ProcessRuntime::new();
  let drivers = DriverRegistry::new().with_driver("slow", |_, _| -> Box<dyn Process> { Box::new(Hanging) });
  let viewport =
    ViewPortConfig::builder("main").size(10, 10).driver(DriverConfig::new("slow", "out")).build().expect("config");
  let options =
    StartupOptions::builder().viewport(viewport).drivers(drivers).boot_window(Duration::from_millis(50)).build();

  let error = RootCoordinator::start(&runtime, options).expect_err("boot window elapses");

  assert!(matches!(error, StartupError::ChildStartFailed { .. }), "unexpected error: {error:?}");
}

#[test]
fn nested_supervisors_wait_for_all_their_children() {
  struct Warming;

  impl Process for Warming {
    fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
      std::thread::sleep(Duration::from_millis(200));
      Ok(())
    }
  }

  let runtime = ProcessRuntime::new();
  let drivers = DriverRegistry::new().with_driver("warming", |_, _| -> Box<dyn Process> { Box::new(Warming) });
  let viewport = ViewPortConfig::builder("main")
    .size(10, 10)
    .driver(DriverConfig::new("warming", "left"))
    .driver(DriverConfig::new("warming", "right"))
    .build()
    .expect("config");
  let options =
    StartupOptions::builder().viewport(viewport).drivers(drivers).boot_window(Duration::from_millis(300)).build();

  let root = RootCoordinator::start(&runtime, options).expect("each driver fits the boot window");

  let static_pool = root.static_viewports().expect("static pool present");
  assert_eq!(Ok(1), static_pool.count());
  assert!(runtime.resolve(&RegisteredName::new("main")).is_ok());
}
