use core::time::Duration;

use crate::{
  config::ConfigError,
  process::{Pid, SpawnError},
  supervision::ChildId,
};

/// Boot-fatal errors returned by [`RootCoordinator::start`](crate::root::RootCoordinator::start). None is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
  /// Another root already holds the root name in this runtime.
  #[error("root coordinator already started as {holder}")]
  AlreadyStarted {
    /// Process holding the root name.
    holder: Pid,
  },
  /// The startup options are malformed.
  #[error("invalid startup options: {0}")]
  InvalidConfig(#[from] ConfigError),
  /// A mandatory child failed to start within its boot window.
  #[error("child {child} failed to start: {source}")]
  ChildStartFailed {
    /// Child of the root that failed.
    child:  ChildId,
    /// Underlying failure.
    source: SpawnError,
  },
  /// The root did not finish starting its children in time.
  #[error("root coordinator did not start within {0:?}")]
  BootTimeout(Duration),
  /// The root process itself could not be spawned.
  #[error(transparent)]
  Spawn(SpawnError),
}
