use core::time::Duration;
use std::collections::HashMap;

use crate::{
  lookup::{LookupReply, LookupRequest},
  process::{AnyMessage, Process, ProcessContext, ProcessError},
  registry::RegisteredName,
  supervision::ChildSpec,
};


/// Long-lived process holding cross-process lookup state: the owner ViewPort of each scene key.
///
/// The table is private to the process; it is read and written only through
/// [`LookupTableClient`](crate::lookup::LookupTableClient). A restart starts from an empty table.
#[derive(Default)]
pub struct LookupTable {
  owners: HashMap<String, RegisteredName>,
}

impl LookupTable {
  /// Name the table registers under.
  pub const NAME: &'static str = "scenic.viewport_tables";
  /// Child identifier under the root coordinator.
  pub const CHILD_ID: &'static str = "viewport_tables";

  /// Creates an empty table.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn child_spec(boot_window: Duration) -> ChildSpec {
    ChildSpec::worker(Self::CHILD_ID, || Box::new(LookupTable::new()))
      .with_name(Self::NAME)
      .with_init_timeout(boot_window)
  }

  fn apply(&mut self, request: LookupRequest) -> LookupReply {
    match request {
      | LookupRequest::PutOwner { key, viewport } => LookupReply::Stored(self.owners.insert(key, viewport)),
      | LookupRequest::Owner(key) => LookupReply::Owner(self.owners.get(&key).cloned()),
      | LookupRequest::ReleaseOwner(viewport) => {
        let before = self.owners.len();
        self.owners.retain(|_, owner| *owner != viewport);
        LookupReply::Released(before - self.owners.len())
      },
      | LookupRequest::KeysOf(viewport) => {
        let mut keys: Vec<String> =
          self.owners.iter().filter(|(_, owner)| **owner == viewport).map(|(key, _)| key.clone()).collect();
        keys.sort();
        LookupReply::Keys(keys)
      },
    }
  }
}

impl Process for LookupTable {
  fn handle_call(&mut self, _ctx: &mut ProcessContext, request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    let request = request.downcast::<LookupRequest>().map_err(|_| ProcessError::UnexpectedMessage("lookup call"))?;
    Ok(Box::new(self.apply(*request)))
  }

  fn handle_cast(&mut self, ctx: &mut ProcessContext, message: AnyMessage) -> Result<(), ProcessError> {
    let request = message.downcast::<LookupRequest>().map_err(|_| ProcessError::UnexpectedMessage("lookup cast"))?;
    let reply = self.apply(*request);
    tracing::trace!(pid = %ctx.pid(), ?reply, "lookup cast applied");
    Ok(())
  }
}
