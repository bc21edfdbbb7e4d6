use crate::{process::Pid, registry::RegisteredName};

/// Errors returned by [`ProcessRegistry`](crate::registry::ProcessRegistry).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// No live process holds the name.
  #[error("no process registered as {0}")]
  NotFound(RegisteredName),
  /// Another live process already holds the name.
  #[error("name {name} is already registered by {holder}")]
  AlreadyRegistered {
    /// Name that was requested.
    name:   RegisteredName,
    /// Process currently holding the name.
    holder: Pid,
  },
}

impl RegistryError {
  /// Returns the process holding the name when the error is a collision.
  #[must_use]
  pub const fn holder(&self) -> Option<Pid> {
    match self {
      | RegistryError::AlreadyRegistered { holder, .. } => Some(*holder),
      | RegistryError::NotFound(_) => None,
    }
  }
}
