use core::time::Duration;

use crate::{
  process::{Pid, ProcessError},
  registry::{RegisteredName, RegistryError},
};

/// Errors returned while spawning a process.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
  /// The requested name could not be registered.
  #[error(transparent)]
  Registry(#[from] RegistryError),
  /// `init` returned an error or panicked.
  #[error("process {pid} failed to initialize: {source}")]
  InitFailed {
    /// Identifier the process was given.
    pid:    Pid,
    /// Failure reported by `init`.
    source: ProcessError,
  },
  /// `init` did not complete within the boot window.
  #[error("process {pid} did not initialize within {timeout:?}")]
  InitTimeout {
    /// Identifier the process was given.
    pid:     Pid,
    /// Boot window that elapsed.
    timeout: Duration,
  },
  /// The operating system refused to start a thread.
  #[error("failed to start process thread: {0}")]
  Thread(String),
}

impl SpawnError {
  /// Walks nested start failures and returns the name whose registration collided, if any.
  #[must_use]
  pub fn name_conflict(&self) -> Option<&RegisteredName> {
    match self {
      | SpawnError::Registry(RegistryError::AlreadyRegistered { name, .. }) => Some(name),
      | SpawnError::InitFailed { source, .. } => source.name_conflict(),
      | _ => None,
    }
  }
}
