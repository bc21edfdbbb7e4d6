use core::time::Duration;
use std::{
  sync::{
    atomic::{AtomicBool, Ordering},
    Condvar, Mutex, PoisonError,
  },
  time::Instant,
};

use crossbeam_channel::Sender;

use crate::{
  process::{Envelope, ExitReason, Pid},
  registry::RegisteredName,
};

/// Shared control block of one process: mailbox sender, kill flag and exit latch.
pub(crate) struct ProcessCell {
  pid:            Pid,
  name:           Option<RegisteredName>,
  mailbox:        Sender<Envelope>,
  kill_requested: AtomicBool,
  exit:           Mutex<Option<ExitReason>>,
  exited:         Condvar,
}

impl ProcessCell {
  pub(crate) fn new(pid: Pid, name: Option<RegisteredName>, mailbox: Sender<Envelope>) -> Self {
    Self {
      pid,
      name,
      mailbox,
      kill_requested: AtomicBool::new(false),
      exit: Mutex::new(None),
      exited: Condvar::new(),
    }
  }

  pub(crate) const fn pid(&self) -> Pid {
    self.pid
  }

  pub(crate) const fn name(&self) -> Option<&RegisteredName> {
    self.name.as_ref()
  }

  /// Enqueues an envelope; returns false once the process is gone.
  pub(crate) fn send(&self, envelope: Envelope) -> bool {
    if self.exit_reason().is_some() {
      return false;
    }
    self.mailbox.send(envelope).is_ok()
  }

  pub(crate) fn request_kill(&self) {
    self.kill_requested.store(true, Ordering::SeqCst);
    let _ = self.mailbox.send(Envelope::Kill);
  }

  pub(crate) fn kill_requested(&self) -> bool {
    self.kill_requested.load(Ordering::SeqCst)
  }

  pub(crate) fn mark_exited(&self, reason: ExitReason) {
    let mut exit = self.exit.lock().unwrap_or_else(PoisonError::into_inner);
    *exit = Some(reason);
    self.exited.notify_all();
  }

  pub(crate) fn exit_reason(&self) -> Option<ExitReason> {
    self.exit.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  pub(crate) fn wait_for_exit(&self, timeout: Duration) -> Option<ExitReason> {
    let deadline = Instant::now() + timeout;
    let mut exit = self.exit.lock().unwrap_or_else(PoisonError::into_inner);
    while exit.is_none() {
      let now = Instant::now();
      if now >= deadline {
        return None;
      }
      let (guard, _) = self.exited.wait_timeout(exit, deadline - now).unwrap_or_else(PoisonError::into_inner);
      exit = guard;
    }
    exit.clone()
  }

  pub(crate) fn wait_for_exit_indefinitely(&self) -> ExitReason {
    let mut exit = self.exit.lock().unwrap_or_else(PoisonError::into_inner);
    loop {
      if let Some(reason) = exit.as_ref() {
        return reason.clone();
      }
      exit = self.exited.wait(exit).unwrap_or_else(PoisonError::into_inner);
    }
  }
}
