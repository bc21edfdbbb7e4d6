use core::time::Duration;

use crate::{
  process::{CallError, Pid, ProcessHandle},
  supervision::{ChildId, ChildInfo, ChildSpec, SupervisorError, SupervisorReply, SupervisorRequest},
};

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed client of a running [`Supervisor`](crate::supervision::Supervisor).
#[derive(Clone, Debug)]
pub struct SupervisorHandle {
  process: ProcessHandle,
  timeout: Duration,
}

impl SupervisorHandle {
  /// Wraps a process known to run a supervisor.
  #[must_use]
  pub const fn new(process: ProcessHandle) -> Self {
    Self { process, timeout: DEFAULT_CALL_TIMEOUT }
  }

  /// Overrides how long requests wait for the supervisor.
  #[must_use]
  pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Underlying process.
  #[must_use]
  pub const fn process(&self) -> &ProcessHandle {
    &self.process
  }

  /// Supervisor identifier.
  #[must_use]
  pub fn pid(&self) -> Pid {
    self.process.pid()
  }

  /// Starts and adopts a new child.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::AlreadyPresent`] on a duplicate identifier and
  /// [`SupervisorError::StartFailed`] when the child does not come up.
  pub fn start_child(&self, spec: ChildSpec) -> Result<Pid, SupervisorError> {
    match self.request(SupervisorRequest::StartChild(spec))? {
      | SupervisorReply::Started(result) => result,
      | _ => Err(self.unexpected()),
    }
  }

  /// Gracefully terminates and forgets a child.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::ChildNotFound`] when no such child is supervised.
  pub fn terminate_child(&self, id: &ChildId) -> Result<(), SupervisorError> {
    match self.request(SupervisorRequest::TerminateChild(id.clone()))? {
      | SupervisorReply::Terminated(result) => result,
      | _ => Err(self.unexpected()),
    }
  }

  /// Lists children in start order.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::Call`] when the supervisor cannot be reached.
  pub fn which_children(&self) -> Result<Vec<ChildInfo>, SupervisorError> {
    match self.request(SupervisorRequest::WhichChildren)? {
      | SupervisorReply::Children(children) => Ok(children),
      | _ => Err(self.unexpected()),
    }
  }

  /// Number of supervised children.
  ///
  /// # Errors
  ///
  /// Returns [`SupervisorError::Call`] when the supervisor cannot be reached.
  pub fn count_children(&self) -> Result<usize, SupervisorError> {
    match self.request(SupervisorRequest::CountChildren)? {
      | SupervisorReply::Count(count) => Ok(count),
      | _ => Err(self.unexpected()),
    }
  }

  fn request(&self, request: SupervisorRequest) -> Result<SupervisorReply, SupervisorError> {
    Ok(self.process.call::<SupervisorRequest, SupervisorReply>(request, self.timeout)?)
  }

  fn unexpected(&self) -> SupervisorError {
    SupervisorError::Call(CallError::UnexpectedReply(self.pid()))
  }
}
