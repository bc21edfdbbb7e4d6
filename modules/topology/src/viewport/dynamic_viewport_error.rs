use crate::{
  config::ConfigError,
  registry::RegisteredName,
  supervision::{ChildId, SupervisorError},
};

/// Errors returned by [`DynamicViewPortSupervisor`](crate::viewport::DynamicViewPortSupervisor) operations.
///
/// They are reported to the caller only; the pool keeps running.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DynamicViewPortError {
  /// A live process already holds the ViewPort's name.
  #[error("viewport {0} is already started")]
  AlreadyStarted(RegisteredName),
  /// The ViewPort configuration is malformed.
  #[error(transparent)]
  InvalidConfig(#[from] ConfigError),
  /// The handle does not refer to a ViewPort of the pool.
  #[error("viewport {0} not found")]
  NotFound(ChildId),
  /// The pool could not be reached or refused the request.
  #[error(transparent)]
  Supervisor(#[from] SupervisorError),
}
