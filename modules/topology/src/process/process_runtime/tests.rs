use core::time::Duration;

use crate::{
  process::{
    AnyMessage, CallError, ExitReason, Process, ProcessContext, ProcessError, ProcessRuntime, SpawnError, SpawnOptions,
  },
  registry::RegistryError,
  test_support::{new_log, Crash, FailingInit, Finish, Ping, Pong, Probe, WAIT},
};

struct SlowInit;

impl Process for SlowInit {
  fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    std::thread::sleep(Duration::from_millis(300));
    Ok(())
  }
}

struct Panicker;

impl Process for Panicker {
  fn handle_cast(&mut self, _ctx: &mut ProcessContext, _message: AnyMessage) -> Result<(), ProcessError> {
    panic!("exploded");
  }
}

#[test]
fn call_returns_typed_reply() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("p", &log), SpawnOptions::new()).unwrap();

  let reply: Pong = handle.call(Ping, WAIT).unwrap();

  assert_eq!("p", reply.0);
}

#[test]
fn call_with_wrong_reply_type_is_reported() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("p", &log), SpawnOptions::new()).unwrap();

  let result = handle.call::<Ping, u32>(Ping, WAIT);

  assert_eq!(Err(CallError::UnexpectedReply(handle.pid())), result);
}

#[test]
fn crash_in_callback_terminates_with_reason() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("p", &log), SpawnOptions::new()).unwrap();

  handle.cast(Crash).unwrap();

  assert_eq!(Some(ExitReason::crashed("p crashed")), handle.wait_for_exit(WAIT));
  assert_eq!(vec!["start p", "stop p"], *log.lock().unwrap());
}

#[test]
fn panic_in_callback_is_contained() {
  let runtime = ProcessRuntime::new();
  let handle = runtime.spawn(Box::new(Panicker), SpawnOptions::new()).unwrap();

  handle.cast(()).unwrap();

  assert_eq!(Some(ExitReason::crashed("panicked: exploded")), handle.wait_for_exit(WAIT));
}

#[test]
fn stop_request_from_callback_ends_normally() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("p", &log), SpawnOptions::new()).unwrap();

  handle.cast(Finish).unwrap();

  assert_eq!(Some(ExitReason::Normal), handle.wait_for_exit(WAIT));
}

#[test]
fn kill_terminates_and_rejects_further_messages() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("p", &log), SpawnOptions::new()).unwrap();

  handle.kill();

  assert_eq!(Some(ExitReason::Killed), handle.wait_for_exit(WAIT));
  assert!(!handle.is_alive());
  assert_eq!(Err(CallError::NotRunning(handle.pid())), handle.call::<Ping, Pong>(Ping, WAIT).map(|_| ()));
}

#[test]
fn registered_name_collision_is_rejected() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let first = runtime.spawn(Probe::boxed("a", &log), SpawnOptions::new().with_name("shared")).unwrap();

  let second = runtime.spawn(Probe::boxed("b", &log), SpawnOptions::new().with_name("shared"));

  assert_eq!(
    Some(SpawnError::Registry(RegistryError::AlreadyRegistered { name: "shared".into(), holder: first.pid() })),
    second.err()
  );
}

#[test]
fn init_failure_is_reported_and_releases_the_name() {
  let runtime = ProcessRuntime::new();

  let result = runtime.spawn(Box::new(FailingInit), SpawnOptions::new().with_name("broken"));

  assert!(matches!(result, Err(SpawnError::InitFailed { source: ProcessError::Failed(_), .. })));
  assert!(!runtime.registry().is_registered(&"broken".into()));
}

#[test]
fn init_exceeding_boot_window_times_out() {
  let runtime = ProcessRuntime::new();

  let result = runtime.spawn(Box::new(SlowInit), SpawnOptions::new().with_init_timeout(Duration::from_millis(20)));

  assert!(matches!(result, Err(SpawnError::InitTimeout { .. })));
}
