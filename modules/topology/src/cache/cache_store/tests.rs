use crate::{
  cache::{CacheClass, CacheClient, CacheStore},
  process::{ProcessRuntime, SpawnOptions},
};

fn start(class: CacheClass) -> CacheClient {
  let runtime = ProcessRuntime::new();
  runtime
    .spawn(Box::new(CacheStore::new(class)), SpawnOptions::new().with_name(class.registered_name()))
    .expect("store starts");
  CacheClient::new(runtime, class)
}

#[test]
fn put_get_delete() {
  let client = start(CacheClass::Static);

  assert_eq!(Ok(false), client.put("font:roboto", vec![1, 2, 3]));
  assert_eq!(Ok(true), client.put("font:roboto", vec![4]));
  assert_eq!(Ok(Some(vec![4])), client.get("font:roboto"));
  assert_eq!(Ok(true), client.delete("font:roboto"));
  assert_eq!(Ok(false), client.delete("font:roboto"));
  assert_eq!(Ok(None), client.get("font:roboto"));
}

#[test]
fn keys_are_sorted() {
  let client = start(CacheClass::Stream);
  client.put("b", Vec::new()).expect("put");
  client.put("a", Vec::new()).expect("put");

  assert_eq!(Ok(vec![String::from("a"), String::from("b")]), client.keys());
  assert_eq!(CacheClass::Stream, client.class());
}
