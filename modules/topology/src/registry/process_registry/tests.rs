use crate::{
  process::{ProcessRuntime, SpawnOptions},
  registry::{RegisteredName, RegistryError},
  test_support::{eventually, new_log, Probe, WAIT},
};

#[test]
fn resolves_live_registration() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("a", &log), SpawnOptions::new().with_name("lookup")).unwrap();

  let resolved = runtime.registry().resolve(&RegisteredName::new("lookup")).unwrap();

  assert_eq!(handle.pid(), resolved.pid());
  assert_eq!(vec![RegisteredName::new("lookup")], runtime.registry().names());
}

#[test]
fn unknown_name_is_not_found() {
  let runtime = ProcessRuntime::new();

  let result = runtime.registry().resolve(&RegisteredName::new("missing"));

  assert_eq!(Err(RegistryError::NotFound(RegisteredName::new("missing"))), result.map(|handle| handle.pid()));
}

#[test]
fn registration_is_released_when_the_holder_terminates() {
  let runtime = ProcessRuntime::new();
  let log = new_log();
  let handle = runtime.spawn(Probe::boxed("a", &log), SpawnOptions::new().with_name("lookup")).unwrap();

  handle.stop();
  assert!(handle.wait_for_exit(WAIT).is_some());

  assert!(eventually(|| !runtime.registry().is_registered(&RegisteredName::new("lookup"))));
  let again = runtime.spawn(Probe::boxed("b", &log), SpawnOptions::new().with_name("lookup"));
  assert!(again.is_ok());
}
