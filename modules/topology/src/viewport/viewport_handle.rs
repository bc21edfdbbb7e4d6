use core::{
  fmt::{Debug, Formatter, Result as FmtResult},
  time::Duration,
};

use crate::{
  process::{ProcessHandle, ProcessRuntime, RequestError},
  registry::{RegisteredName, RegistryError},
  supervision::ChildId,
  viewport::{ViewPortInfo, ViewPortRequest},
};

/// Reference to a ViewPort added to the dynamic pool.
///
/// The handle names the pool entry, not a process: it survives restarts of the ViewPort and turns stale once the
/// ViewPort is removed or dropped after a crash.
#[derive(Clone)]
pub struct ViewPortHandle {
  id:      ChildId,
  name:    RegisteredName,
  runtime: ProcessRuntime,
}

impl ViewPortHandle {
  pub(crate) const fn new(id: ChildId, name: RegisteredName, runtime: ProcessRuntime) -> Self {
    Self { id, name, runtime }
  }

  /// Pool entry identifier.
  #[must_use]
  pub const fn id(&self) -> &ChildId {
    &self.id
  }

  /// Registered name of the ViewPort.
  #[must_use]
  pub const fn name(&self) -> &RegisteredName {
    &self.name
  }

  /// Current ViewPort process.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] while the ViewPort is not running.
  pub fn process(&self) -> Result<ProcessHandle, RegistryError> {
    self.runtime.resolve(&self.name)
  }

  /// Asks the running ViewPort for a snapshot of its state.
  ///
  /// # Errors
  ///
  /// Returns [`RequestError`] when the ViewPort is not running or does not answer in time.
  pub fn info(&self, timeout: Duration) -> Result<ViewPortInfo, RequestError> {
    Ok(self.process()?.call::<ViewPortRequest, ViewPortInfo>(ViewPortRequest::Info, timeout)?)
  }
}

impl PartialEq for ViewPortHandle {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for ViewPortHandle {}

impl Debug for ViewPortHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("ViewPortHandle").field("id", &self.id).field("name", &self.name).finish_non_exhaustive()
  }
}
