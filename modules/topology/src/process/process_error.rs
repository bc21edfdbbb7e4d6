use crate::{
  process::SpawnError,
  registry::RegisteredName,
  supervision::ChildId,
};

/// Failure raised by a [`Process`](crate::process::Process) callback.
///
/// Returning an error from any callback other than `init` terminates the process with an abnormal
/// [`ExitReason`](crate::process::ExitReason).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
  /// Free-form failure.
  #[error("{0}")]
  Failed(String),
  /// The process received a message it does not understand.
  #[error("unexpected {0} message")]
  UnexpectedMessage(&'static str),
  /// A supervisor could not start one of its children.
  #[error("child {id} failed to start: {source}")]
  ChildStart {
    /// Identifier of the failing child.
    id:     ChildId,
    /// Underlying spawn failure.
    source: Box<SpawnError>,
  },
  /// A supervisor exhausted its restart budget.
  #[error("restart intensity exceeded")]
  RestartIntensityExceeded,
}

impl ProcessError {
  /// Builds a free-form failure.
  #[must_use]
  pub fn failed(reason: impl Into<String>) -> Self {
    ProcessError::Failed(reason.into())
  }

  /// Walks nested start failures and returns the name whose registration collided, if any.
  #[must_use]
  pub fn name_conflict(&self) -> Option<&RegisteredName> {
    match self {
      | ProcessError::ChildStart { source, .. } => source.name_conflict(),
      | _ => None,
    }
  }
}
