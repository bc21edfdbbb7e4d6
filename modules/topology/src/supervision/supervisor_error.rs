use crate::{
  process::{CallError, SpawnError},
  registry::RegistryError,
  supervision::ChildId,
};

/// Errors returned by supervisor operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SupervisorError {
  /// A child with the same identifier is already supervised.
  #[error("child {0} is already present")]
  AlreadyPresent(ChildId),
  /// No child with that identifier is supervised.
  #[error("child {0} not found")]
  ChildNotFound(ChildId),
  /// The child could not be started.
  #[error("child {id} failed to start: {source}")]
  StartFailed {
    /// Child identifier.
    id:     ChildId,
    /// Underlying spawn failure.
    source: SpawnError,
  },
  /// The supervisor is not running.
  #[error(transparent)]
  Unavailable(#[from] RegistryError),
  /// The request to the supervisor failed.
  #[error(transparent)]
  Call(#[from] CallError),
}
