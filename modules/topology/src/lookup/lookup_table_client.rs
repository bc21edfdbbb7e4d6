use core::time::Duration;

use crate::{
  lookup::{LookupReply, LookupRequest, LookupTable},
  process::{CallError, ProcessRuntime, RequestError},
  registry::RegisteredName,
};

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Client of the [`LookupTable`], resolving the table by name on every request.
#[derive(Clone)]
pub struct LookupTableClient {
  runtime: ProcessRuntime,
  timeout: Duration,
}

impl LookupTableClient {
  /// Creates a client bound to `runtime`.
  #[must_use]
  pub fn new(runtime: ProcessRuntime) -> Self {
    Self { runtime, timeout: DEFAULT_CALL_TIMEOUT }
  }

  /// Overrides how long requests wait for the table.
  #[must_use]
  pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Records `viewport` as the owner of `key`, returning the previous owner.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the table is not running or does not answer.
  pub fn put_owner(
    &self,
    key: impl Into<String>,
    viewport: RegisteredName,
  ) -> Result<Option<RegisteredName>, RequestError> {
    match self.request(LookupRequest::PutOwner { key: key.into(), viewport })? {
      | LookupReply::Stored(previous) => Ok(previous),
      | _ => Err(self.unexpected()),
    }
  }

  /// Owner of `key`, if any.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the table is not running or does not answer.
  pub fn owner(&self, key: &str) -> Result<Option<RegisteredName>, RequestError> {
    match self.request(LookupRequest::Owner(key.to_owned()))? {
      | LookupReply::Owner(owner) => Ok(owner),
      | _ => Err(self.unexpected()),
    }
  }

  /// Drops every key owned by `viewport`, returning how many were dropped.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the table is not running or does not answer.
  pub fn release_owner(&self, viewport: &RegisteredName) -> Result<usize, RequestError> {
    match self.request(LookupRequest::ReleaseOwner(viewport.clone()))? {
      | LookupReply::Released(count) => Ok(count),
      | _ => Err(self.unexpected()),
    }
  }

  /// Keys owned by `viewport`, sorted.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the table is not running or does not answer.
  pub fn keys_of(&self, viewport: &RegisteredName) -> Result<Vec<String>, RequestError> {
    match self.request(LookupRequest::KeysOf(viewport.clone()))? {
      | LookupReply::Keys(keys) => Ok(keys),
      | _ => Err(self.unexpected()),
    }
  }

  /// Fire-and-forget variant of [`Self::release_owner`], used from terminating processes.
  pub(crate) fn release_owner_async(&self, viewport: &RegisteredName) -> Result<(), RequestError> {
    let table = self.runtime.resolve(&RegisteredName::from(LookupTable::NAME))?;
    Ok(table.cast(LookupRequest::ReleaseOwner(viewport.clone()))?)
  }

  fn request(&self, request: LookupRequest) -> Result<LookupReply, RequestError> {
    let table = self.runtime.resolve(&RegisteredName::from(LookupTable::NAME))?;
    Ok(table.call::<LookupRequest, LookupReply>(request, self.timeout)?)
  }

  fn unexpected(&self) -> RequestError {
    let pid = self.runtime.resolve(&RegisteredName::from(LookupTable::NAME)).map(|table| table.pid());
    match pid {
      | Ok(pid) => RequestError::Call(CallError::UnexpectedReply(pid)),
      | Err(error) => RequestError::Unavailable(error),
    }
  }
}
