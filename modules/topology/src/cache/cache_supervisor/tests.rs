use core::time::Duration;

use crate::{
  cache::{CacheClass, CacheClient, CacheSupervisor},
  config::RestartIntensity,
  process::{ProcessRuntime, SpawnOptions},
  registry::RegisteredName,
  supervision::SupervisorHandle,
  test_support::eventually,
};

#[test]
fn stores_are_registered_and_restarted_independently() {
  let runtime = ProcessRuntime::new();
  let supervisor = runtime
    .spawn(
      Box::new(CacheSupervisor::supervisor(RestartIntensity::default(), Duration::from_secs(1))),
      SpawnOptions::new().with_name(CacheSupervisor::NAME),
    )
    .expect("cache supervisor starts");
  let stream = CacheClient::new(runtime.clone(), CacheClass::Stream);
  stream.put("frame", vec![7]).expect("put");

  let static_store = runtime.resolve(&RegisteredName::from(CacheClass::Static.registered_name())).expect("static");
  static_store.kill();

  assert!(eventually(|| {
    runtime
      .resolve(&RegisteredName::from(CacheClass::Static.registered_name()))
      .is_ok_and(|store| store.pid() != static_store.pid())
  }));
  assert_eq!(Ok(Some(vec![7])), stream.get("frame"));
  assert_eq!(Ok(2), SupervisorHandle::new(supervisor).count_children());
}

#[test]
fn stores_inherit_the_boot_window() {
  let window = Duration::from_millis(250);

  let stores = CacheSupervisor::stores(window);

  assert_eq!(vec!["static", "stream"], stores.iter().map(|store| store.id().as_str()).collect::<Vec<_>>());
  assert!(stores.iter().all(|store| store.init_timeout() == window));
  assert_eq!(
    Duration::from_millis(750),
    CacheSupervisor::child_spec(RestartIntensity::default(), window).init_timeout()
  );
}
