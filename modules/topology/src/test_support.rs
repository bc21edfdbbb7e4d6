use core::time::Duration;
use std::{
  sync::{Arc, Mutex},
  thread,
  time::Instant,
};

use crate::process::{AnyMessage, ExitReason, Process, ProcessContext, ProcessError};

pub(crate) const WAIT: Duration = Duration::from_secs(3);

/// Polls `condition` until it holds or the deadline passes.
pub(crate) fn eventually(mut condition: impl FnMut() -> bool) -> bool {
  let deadline = Instant::now() + WAIT;
  while Instant::now() < deadline {
    if condition() {
      return true;
    }
    thread::sleep(Duration::from_millis(10));
  }
  condition()
}

pub(crate) struct Ping;
pub(crate) struct Pong(pub(crate) &'static str);
pub(crate) struct Crash;
pub(crate) struct Finish;

/// Worker answering pings, crashing or finishing on demand and logging its lifecycle.
pub(crate) struct Probe {
  label: &'static str,
  log:   Arc<Mutex<Vec<String>>>,
}

impl Probe {
  pub(crate) fn new(label: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
    Self { label, log }
  }

  pub(crate) fn boxed(label: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Box<dyn Process> {
    Box::new(Self::new(label, Arc::clone(log)))
  }
}

impl Process for Probe {
  fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    self.log.lock().unwrap().push(format!("start {}", self.label));
    Ok(())
  }

  fn handle_call(&mut self, _ctx: &mut ProcessContext, request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    if request.downcast::<Ping>().is_ok() {
      return Ok(Box::new(Pong(self.label)));
    }
    Err(ProcessError::UnexpectedMessage("call"))
  }

  fn handle_cast(&mut self, ctx: &mut ProcessContext, message: AnyMessage) -> Result<(), ProcessError> {
    if message.is::<Crash>() {
      return Err(ProcessError::failed(format!("{} crashed", self.label)));
    }
    if message.is::<Finish>() {
      ctx.stop(ExitReason::Normal);
    }
    Ok(())
  }

  fn terminate(&mut self, _ctx: &mut ProcessContext, _reason: &ExitReason) {
    self.log.lock().unwrap().push(format!("stop {}", self.label));
  }
}

/// Worker whose `init` always fails.
pub(crate) struct FailingInit;

impl Process for FailingInit {
  fn init(&mut self, _ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    Err(ProcessError::failed("refused to start"))
  }
}

pub(crate) fn new_log() -> Arc<Mutex<Vec<String>>> {
  Arc::new(Mutex::new(Vec::new()))
}
