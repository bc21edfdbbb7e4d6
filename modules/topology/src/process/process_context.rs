use crate::{
  process::{ExitReason, Pid, Process, ProcessHandle, ProcessRuntime, SpawnError, SpawnOptions},
  registry::RegisteredName,
};

/// Per-process view of the runtime handed to every callback.
pub struct ProcessContext {
  runtime:      ProcessRuntime,
  this:         ProcessHandle,
  stop_request: Option<ExitReason>,
}

impl ProcessContext {
  pub(crate) const fn new(runtime: ProcessRuntime, this: ProcessHandle) -> Self {
    Self { runtime, this, stop_request: None }
  }

  /// Identifier of the running process.
  #[must_use]
  pub fn pid(&self) -> Pid {
    self.this.pid()
  }

  /// Name the running process is registered under.
  #[must_use]
  pub fn name(&self) -> Option<&RegisteredName> {
    self.this.name()
  }

  /// Handle to the running process itself.
  #[must_use]
  pub const fn this(&self) -> &ProcessHandle {
    &self.this
  }

  /// Runtime hosting the process.
  #[must_use]
  pub const fn runtime(&self) -> &ProcessRuntime {
    &self.runtime
  }

  /// Spawns a child whose termination is reported to this process through
  /// [`Process::handle_exit`](crate::process::Process::handle_exit).
  ///
  /// # Errors
  ///
  /// Propagates the child's [`SpawnError`].
  pub fn spawn_link(&self, process: Box<dyn Process>, options: SpawnOptions) -> Result<ProcessHandle, SpawnError> {
    self.runtime.spawn_with_parent(process, options, Some(self.this.clone()))
  }

  /// Ends the receive loop with `reason` once the current callback returns.
  pub fn stop(&mut self, reason: ExitReason) {
    self.stop_request = Some(reason);
  }

  pub(crate) fn take_stop_request(&mut self) -> Option<ExitReason> {
    self.stop_request.take()
  }
}
