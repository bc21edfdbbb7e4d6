use core::any::Any;
use std::{
  panic::{catch_unwind, AssertUnwindSafe},
  sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
  },
  thread,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::{
  process::{
    Envelope, ExitReason, Pid, Process, ProcessCell, ProcessContext, ProcessError, ProcessHandle, SpawnError,
    SpawnOptions,
  },
  registry::{ProcessRegistry, RegisteredName, RegistryError},
  supervision::SupervisionEventPublisher,
};

#[cfg(test)]
mod tests;

struct RuntimeInner {
  next_pid: AtomicU64,
  registry: ProcessRegistry,
  events:   SupervisionEventPublisher,
}

/// Host for processes: allocates identifiers, owns the name registry and the supervision event queue.
///
/// Cloning is cheap; every clone refers to the same runtime.
#[derive(Clone)]
pub struct ProcessRuntime {
  inner: Arc<RuntimeInner>,
}

impl ProcessRuntime {
  /// Creates an empty runtime.
  #[must_use]
  pub fn new() -> Self {
    Self {
      inner: Arc::new(RuntimeInner {
        next_pid: AtomicU64::new(1),
        registry: ProcessRegistry::new(),
        events:   SupervisionEventPublisher::new(),
      }),
    }
  }

  /// Name registry shared by every process of this runtime.
  #[must_use]
  pub fn registry(&self) -> &ProcessRegistry {
    &self.inner.registry
  }

  /// Queue of supervision events.
  #[must_use]
  pub fn events(&self) -> &SupervisionEventPublisher {
    &self.inner.events
  }

  /// Resolves a registered name to its live process.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] when nothing live holds the name.
  pub fn resolve(&self, name: &RegisteredName) -> Result<ProcessHandle, RegistryError> {
    self.inner.registry.resolve(name)
  }

  /// Spawns an unlinked process and waits for its `init` handshake.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError`] when the name is taken, `init` fails, or the boot window elapses.
  pub fn spawn(&self, process: Box<dyn Process>, options: SpawnOptions) -> Result<ProcessHandle, SpawnError> {
    self.spawn_with_parent(process, options, None)
  }

  pub(crate) fn spawn_with_parent(
    &self,
    process: Box<dyn Process>,
    options: SpawnOptions,
    parent: Option<ProcessHandle>,
  ) -> Result<ProcessHandle, SpawnError> {
    let pid = Pid::new(self.inner.next_pid.fetch_add(1, Ordering::Relaxed));
    let (mailbox, inbox) = crossbeam_channel::unbounded();
    let handle = ProcessHandle::from_cell(Arc::new(ProcessCell::new(pid, options.name().cloned(), mailbox)));

    if let Some(name) = options.name() {
      self.inner.registry.register(name.clone(), handle.clone())?;
    }

    let (init_tx, init_rx) = crossbeam_channel::bounded(1);
    let ctx = ProcessContext::new(self.clone(), handle.clone());
    let thread_name = match options.name() {
      | Some(name) => name.to_string(),
      | None => format!("process-{}", pid.value()),
    };
    let spawned = thread::Builder::new().name(thread_name).spawn(move || run(process, ctx, &inbox, &init_tx, parent));
    if let Err(error) = spawned {
      self.inner.registry.release(pid);
      handle.cell().mark_exited(ExitReason::crashed(error.to_string()));
      return Err(SpawnError::Thread(error.to_string()));
    }

    match init_rx.recv_timeout(options.init_timeout()) {
      | Ok(Ok(())) => {
        tracing::debug!(%pid, name = ?options.name(), "process started");
        Ok(handle)
      },
      | Ok(Err(source)) => Err(SpawnError::InitFailed { pid, source }),
      | Err(RecvTimeoutError::Timeout) => {
        tracing::warn!(%pid, name = ?options.name(), timeout = ?options.init_timeout(), "process init timed out");
        handle.kill();
        Err(SpawnError::InitTimeout { pid, timeout: options.init_timeout() })
      },
      | Err(RecvTimeoutError::Disconnected) => {
        Err(SpawnError::InitFailed { pid, source: ProcessError::failed("process thread ended during init") })
      },
    }
  }

  fn release(&self, pid: Pid) {
    let released = self.inner.registry.release(pid);
    if !released.is_empty() {
      tracing::trace!(%pid, ?released, "released registered names");
    }
  }
}

impl Default for ProcessRuntime {
  fn default() -> Self {
    Self::new()
  }
}

fn run(
  mut process: Box<dyn Process>,
  mut ctx: ProcessContext,
  inbox: &Receiver<Envelope>,
  init_tx: &Sender<Result<(), ProcessError>>,
  parent: Option<ProcessHandle>,
) {
  let this = ctx.this().clone();
  let pid = this.pid();

  let init = catch_unwind(AssertUnwindSafe(|| process.init(&mut ctx)))
    .unwrap_or_else(|payload| Err(ProcessError::failed(panic_message(payload.as_ref()))));
  if let Err(error) = init {
    tracing::debug!(%pid, %error, "process init failed");
    ctx.runtime().release(pid);
    this.cell().mark_exited(ExitReason::crashed(error.to_string()));
    let _ = init_tx.send(Err(error));
    return;
  }
  let _ = init_tx.send(Ok(()));

  let reason = receive_loop(process.as_mut(), &mut ctx, inbox);
  if catch_unwind(AssertUnwindSafe(|| process.terminate(&mut ctx, &reason))).is_err() {
    tracing::warn!(%pid, "terminate callback panicked");
  }

  if reason.is_abnormal() {
    tracing::warn!(%pid, name = ?this.name(), %reason, "process exited abnormally");
  } else {
    tracing::debug!(%pid, name = ?this.name(), %reason, "process exited");
  }

  ctx.runtime().release(pid);
  this.cell().mark_exited(reason.clone());
  while inbox.try_recv().is_ok() {}
  if let Some(parent) = parent {
    let _ = parent.notify_exit(pid, reason);
  }
}

fn receive_loop(process: &mut dyn Process, ctx: &mut ProcessContext, inbox: &Receiver<Envelope>) -> ExitReason {
  loop {
    if ctx.this().cell().kill_requested() {
      return ExitReason::Killed;
    }
    let Ok(envelope) = inbox.recv() else {
      return ExitReason::Shutdown;
    };
    if ctx.this().cell().kill_requested() {
      return ExitReason::Killed;
    }
    match catch_unwind(AssertUnwindSafe(|| dispatch(&mut *process, &mut *ctx, envelope))) {
      | Ok(Ok(None)) => {},
      | Ok(Ok(Some(reason))) => return reason,
      | Ok(Err(error)) => return ExitReason::from(error),
      | Err(payload) => return ExitReason::crashed(panic_message(payload.as_ref())),
    }
    if let Some(reason) = ctx.take_stop_request() {
      return reason;
    }
  }
}

fn dispatch(
  process: &mut dyn Process,
  ctx: &mut ProcessContext,
  envelope: Envelope,
) -> Result<Option<ExitReason>, ProcessError> {
  match envelope {
    | Envelope::Call { request, reply_to } => {
      let reply = process.handle_call(ctx, request)?;
      let _ = reply_to.send(reply);
      Ok(None)
    },
    | Envelope::Cast(message) => process.handle_cast(ctx, message).map(|()| None),
    | Envelope::Exit { pid, reason } => process.handle_exit(ctx, pid, &reason).map(|()| None),
    | Envelope::Stop => Ok(Some(ExitReason::Shutdown)),
    | Envelope::Kill => Ok(Some(ExitReason::Killed)),
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    format!("panicked: {message}")
  } else if let Some(message) = payload.downcast_ref::<String>() {
    format!("panicked: {message}")
  } else {
    String::from("panicked")
  }
}
