use crate::process::{AnyMessage, ExitReason, Pid, ProcessContext, ProcessError};

/// Behaviour of a process: private state plus callbacks driven by its mailbox.
///
/// Callbacks run on the process's own thread, one message at a time. Returning an error (or panicking) from any
/// callback after `init` terminates the process abnormally; its linked parent is then notified.
pub trait Process: Send + 'static {
  /// Runs before the spawner is released. An error aborts the spawn.
  fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    Ok(())
  }

  /// Answers a synchronous request.
  fn handle_call(&mut self, _ctx: &mut ProcessContext, _request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    Err(ProcessError::UnexpectedMessage("call"))
  }

  /// Handles a fire-and-forget message.
  fn handle_cast(&mut self, _ctx: &mut ProcessContext, _message: AnyMessage) -> Result<(), ProcessError> {
    Err(ProcessError::UnexpectedMessage("cast"))
  }

  /// Reacts to the termination of a process spawned through [`ProcessContext::spawn_link`].
  fn handle_exit(&mut self, _ctx: &mut ProcessContext, _pid: Pid, _reason: &ExitReason) -> Result<(), ProcessError> {
    Ok(())
  }

  /// Runs once after the receive loop ends, whatever the reason.
  fn terminate(&mut self, _ctx: &mut ProcessContext, _reason: &ExitReason) {}
}
