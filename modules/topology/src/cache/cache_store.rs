use core::time::Duration;
use std::collections::HashMap;

use crate::{
  cache::{CacheClass, CacheReply, CacheRequest},
  process::{AnyMessage, ExitReason, Process, ProcessContext, ProcessError},
  supervision::ChildSpec,
};

#[cfg(test)]
mod tests;

/// Worker owning the entries of one [`CacheClass`].
///
/// Content addressing and eviction belong to the embedder; the store only keeps opaque bytes by key.
pub struct CacheStore {
  class:   CacheClass,
  entries: HashMap<String, Vec<u8>>,
}

impl CacheStore {
  /// Creates an empty store.
  #[must_use]
  pub fn new(class: CacheClass) -> Self {
    Self { class, entries: HashMap::new() }
  }

  /// Class of assets held by the store.
  #[must_use]
  pub const fn class(&self) -> CacheClass {
    self.class
  }

  pub(crate) fn child_spec(class: CacheClass, boot_window: Duration) -> ChildSpec {
    ChildSpec::worker(class.child_id(), move || Box::new(CacheStore::new(class)))
      .with_name(class.registered_name())
      .with_init_timeout(boot_window)
  }
}

impl Process for CacheStore {
  fn init(&mut self, ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    tracing::debug!(pid = %ctx.pid(), class = %self.class, "cache store started");
    Ok(())
  }

  fn handle_call(&mut self, _ctx: &mut ProcessContext, request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    let request = request.downcast::<CacheRequest>().map_err(|_| ProcessError::UnexpectedMessage("cache call"))?;
    let reply = match *request {
      | CacheRequest::Put { key, data } => CacheReply::Stored(self.entries.insert(key, data).is_some()),
      | CacheRequest::Get(key) => CacheReply::Entry(self.entries.get(&key).cloned()),
      | CacheRequest::Delete(key) => CacheReply::Deleted(self.entries.remove(&key).is_some()),
      | CacheRequest::Keys => {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        CacheReply::Keys(keys)
      },
    };
    Ok(Box::new(reply))
  }

  fn terminate(&mut self, ctx: &mut ProcessContext, reason: &ExitReason) {
    let entries = self.entries.len();
    tracing::debug!(pid = %ctx.pid(), class = %self.class, entries, %reason, "cache store stopped");
  }
}
