use core::{
  fmt::{Debug, Formatter, Result as FmtResult},
  time::Duration,
};
use std::sync::Arc;

use crossbeam_channel::RecvTimeoutError;

use crate::{
  process::{CallError, Envelope, ExitReason, Pid, ProcessCell},
  registry::RegisteredName,
};

/// Cloneable reference to a running (or terminated) process.
///
/// Handles never keep a process alive; once it terminates every operation reports that it is gone.
#[derive(Clone)]
pub struct ProcessHandle {
  cell: Arc<ProcessCell>,
}

impl ProcessHandle {
  pub(crate) fn from_cell(cell: Arc<ProcessCell>) -> Self {
    Self { cell }
  }

  pub(crate) fn cell(&self) -> &ProcessCell {
    &self.cell
  }

  /// Identifier of the process.
  #[must_use]
  pub fn pid(&self) -> Pid {
    self.cell.pid()
  }

  /// Name the process was registered under at spawn time.
  #[must_use]
  pub fn name(&self) -> Option<&RegisteredName> {
    self.cell.name()
  }

  /// Whether the process is still running.
  #[must_use]
  pub fn is_alive(&self) -> bool {
    self.cell.exit_reason().is_none()
  }

  /// Exit reason once the process terminated.
  #[must_use]
  pub fn exit_reason(&self) -> Option<ExitReason> {
    self.cell.exit_reason()
  }

  /// Sends `request` and blocks until the typed reply arrives.
  ///
  /// # Errors
  ///
  /// Returns [`CallError`] when the process is gone, does not answer within `timeout`, or answers with a payload
  /// other than `Resp`.
  pub fn call<Req, Resp>(&self, request: Req, timeout: Duration) -> Result<Resp, CallError>
  where
    Req: Send + 'static,
    Resp: 'static, {
    let pid = self.pid();
    let (reply_to, reply) = crossbeam_channel::bounded(1);
    if !self.cell.send(Envelope::Call { request: Box::new(request), reply_to }) {
      return Err(CallError::NotRunning(pid));
    }
    match reply.recv_timeout(timeout) {
      | Ok(answer) => answer.downcast::<Resp>().map(|answer| *answer).map_err(|_| CallError::UnexpectedReply(pid)),
      | Err(RecvTimeoutError::Timeout) => Err(CallError::Timeout { pid, timeout }),
      | Err(RecvTimeoutError::Disconnected) => Err(CallError::Exited(pid)),
    }
  }

  /// Sends `message` without waiting for it to be handled.
  ///
  /// # Errors
  ///
  /// Returns [`CallError::NotRunning`] when the process is gone.
  pub fn cast<M>(&self, message: M) -> Result<(), CallError>
  where
    M: Send + 'static, {
    if self.cell.send(Envelope::Cast(Box::new(message))) {
      Ok(())
    } else {
      Err(CallError::NotRunning(self.pid()))
    }
  }

  /// Asks the process to shut down after the messages already queued.
  ///
  /// Returns false when the process was not running.
  pub fn stop(&self) -> bool {
    self.cell.send(Envelope::Stop)
  }

  /// Terminates the process before it handles any further message.
  pub fn kill(&self) {
    self.cell.request_kill();
  }

  /// Blocks until the process terminates or `timeout` elapses.
  #[must_use]
  pub fn wait_for_exit(&self, timeout: Duration) -> Option<ExitReason> {
    self.cell.wait_for_exit(timeout)
  }

  /// Blocks until the process terminates.
  #[must_use]
  pub fn join(&self) -> ExitReason {
    self.cell.wait_for_exit_indefinitely()
  }

  pub(crate) fn notify_exit(&self, pid: Pid, reason: ExitReason) -> bool {
    self.cell.send(Envelope::Exit { pid, reason })
  }
}

impl PartialEq for ProcessHandle {
  fn eq(&self, other: &Self) -> bool {
    self.pid() == other.pid()
  }
}

impl Eq for ProcessHandle {}

impl Debug for ProcessHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("ProcessHandle").field("pid", &self.pid()).field("name", &self.name()).finish()
  }
}
