use core::time::Duration;

use crate::{
  cache::{CacheClass, CacheReply, CacheRequest},
  process::{CallError, ProcessHandle, ProcessRuntime, RequestError},
  registry::RegisteredName,
};

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Client of one cache store, resolved by name on every request so restarts stay transparent.
#[derive(Clone)]
pub struct CacheClient {
  runtime: ProcessRuntime,
  class:   CacheClass,
  timeout: Duration,
}

impl CacheClient {
  /// Creates a client for the store of `class`.
  #[must_use]
  pub fn new(runtime: ProcessRuntime, class: CacheClass) -> Self {
    Self { runtime, class, timeout: DEFAULT_CALL_TIMEOUT }
  }

  /// Overrides how long requests wait for the store.
  #[must_use]
  pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Class of the target store.
  #[must_use]
  pub const fn class(&self) -> CacheClass {
    self.class
  }

  /// Stores `data` under `key`, returning whether an entry was replaced.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the store is not running or does not answer.
  pub fn put(&self, key: impl Into<String>, data: Vec<u8>) -> Result<bool, RequestError> {
    let (store, reply) = self.request(CacheRequest::Put { key: key.into(), data })?;
    match reply {
      | CacheReply::Stored(replaced) => Ok(replaced),
      | _ => Err(unexpected(&store)),
    }
  }

  /// Entry stored under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the store is not running or does not answer.
  pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RequestError> {
    let (store, reply) = self.request(CacheRequest::Get(key.to_owned()))?;
    match reply {
      | CacheReply::Entry(entry) => Ok(entry),
      | _ => Err(unexpected(&store)),
    }
  }

  /// Removes the entry under `key`, returning whether it existed.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the store is not running or does not answer.
  pub fn delete(&self, key: &str) -> Result<bool, RequestError> {
    let (store, reply) = self.request(CacheRequest::Delete(key.to_owned()))?;
    match reply {
      | CacheReply::Deleted(existed) => Ok(existed),
      | _ => Err(unexpected(&store)),
    }
  }

  /// Stored keys, sorted.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the store is not running or does not answer.
  pub fn keys(&self) -> Result<Vec<String>, RequestError> {
    let (store, reply) = self.request(CacheRequest::Keys)?;
    match reply {
      | CacheReply::Keys(keys) => Ok(keys),
      | _ => Err(unexpected(&store)),
    }
  }

  fn request(&self, request: CacheRequest) -> Result<(ProcessHandle, CacheReply), RequestError> {
    let store = self.runtime.resolve(&RegisteredName::from(self.class.registered_name()))?;
    let reply = store.call::<CacheRequest, CacheReply>(request, self.timeout)?;
    Ok((store, reply))
  }
}

fn unexpected(store: &ProcessHandle) -> RequestError {
  RequestError::Call(CallError::UnexpectedReply(store.pid()))
}
