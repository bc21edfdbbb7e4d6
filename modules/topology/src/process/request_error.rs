use crate::{process::CallError, registry::RegistryError};

/// Errors returned by clients that resolve a named process before talking to it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
  /// The named process is not running.
  #[error(transparent)]
  Unavailable(#[from] RegistryError),
  /// The request itself failed.
  #[error(transparent)]
  Call(#[from] CallError),
}
