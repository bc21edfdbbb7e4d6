use std::time::Instant;

use crate::{
  process::{AnyMessage, ExitReason, Pid, Process, ProcessContext, ProcessError, ProcessHandle},
  supervision::{
    AutoShutdown, ChildId, ChildInfo, ChildSpec, RestartPolicy, RestartTracker, Strategy, SupervisionEvent,
    SupervisorError, SupervisorFlags, SupervisorReply, SupervisorRequest,
  },
};


struct Child {
  spec:   ChildSpec,
  handle: Option<ProcessHandle>,
}

impl Child {
  fn info(&self) -> ChildInfo {
    ChildInfo::new(
      self.spec.id().clone(),
      self.handle.as_ref().map(ProcessHandle::pid),
      self.spec.kind(),
      self.spec.restart(),
    )
  }
}

/// Process that starts, watches and restarts a list of children.
///
/// Children are started in list order during `init`; if one fails, the ones already running are shut down in
/// reverse order and the supervisor fails to start. At runtime every child exit is matched against the child's
/// [`RestartPolicy`] and the supervisor's [`Strategy`]. Exhausting the restart intensity terminates the supervisor
/// with [`ExitReason::MaxRestartIntensity`], which its own parent treats as a crash.
pub struct Supervisor {
  flags:    SupervisorFlags,
  initial:  Vec<ChildSpec>,
  children: Vec<Child>,
  tracker:  RestartTracker,
}

impl Supervisor {
  /// Creates a supervisor that will start `children` in order.
  #[must_use]
  pub fn new(flags: SupervisorFlags, children: Vec<ChildSpec>) -> Self {
    Self { flags, initial: children, children: Vec::new(), tracker: RestartTracker::new(flags.intensity()) }
  }

  fn index_of_pid(&self, pid: Pid) -> Option<usize> {
    self.children.iter().position(|child| child.handle.as_ref().is_some_and(|handle| handle.pid() == pid))
  }

  fn index_of_id(&self, id: &ChildId) -> Option<usize> {
    self.children.iter().position(|child| child.spec.id() == id)
  }

  fn start_child(&mut self, ctx: &ProcessContext, spec: ChildSpec) -> Result<Pid, SupervisorError> {
    if self.index_of_id(spec.id()).is_some() {
      return Err(SupervisorError::AlreadyPresent(spec.id().clone()));
    }
    let handle =
      spec.spawn(ctx).map_err(|source| SupervisorError::StartFailed { id: spec.id().clone(), source })?;
    let pid = handle.pid();
    tracing::debug!(supervisor = %ctx.pid(), child = %spec.id(), %pid, "child started");
    ctx.runtime().events().enqueue(SupervisionEvent::ChildStarted {
      supervisor: ctx.pid(),
      child: spec.id().clone(),
      pid,
    });
    self.children.push(Child { spec, handle: Some(handle) });
    Ok(pid)
  }

  fn terminate_child(&mut self, ctx: &ProcessContext, id: &ChildId) -> Result<(), SupervisorError> {
    let index = self.index_of_id(id).ok_or_else(|| SupervisorError::ChildNotFound(id.clone()))?;
    let child = self.children.remove(index);
    if let Some(handle) = &child.handle {
      let reason = child.spec.shutdown().terminate(handle);
      tracing::debug!(supervisor = %ctx.pid(), child = %id, ?reason, "child terminated");
    }
    ctx.runtime().events().enqueue(SupervisionEvent::ChildTerminated { supervisor: ctx.pid(), child: id.clone() });
    Ok(())
  }

  fn shutdown_all(&mut self, ctx: &ProcessContext) {
    while let Some(child) = self.children.pop() {
      if let Some(handle) = &child.handle {
        let reason = child.spec.shutdown().terminate(handle);
        tracing::debug!(supervisor = %ctx.pid(), child = %child.spec.id(), ?reason, "child shut down");
      }
    }
  }

  fn on_child_exit(&mut self, ctx: &mut ProcessContext, index: usize, reason: &ExitReason) -> Result<(), ProcessError> {
    let child = &mut self.children[index];
    let pid = child.handle.take().map(|handle| handle.pid());
    let id = child.spec.id().clone();
    if let Some(pid) = pid {
      ctx.runtime().events().enqueue(SupervisionEvent::ChildExited {
        supervisor: ctx.pid(),
        child: id.clone(),
        pid,
        reason: reason.clone(),
      });
    }
    if reason.is_abnormal() {
      tracing::warn!(supervisor = %ctx.pid(), child = %id, %reason, "child crashed");
    } else {
      tracing::debug!(supervisor = %ctx.pid(), child = %id, %reason, "child exited");
    }

    if !child.spec.restart().should_restart(reason) {
      let significant = child.spec.significant();
      self.children.remove(index);
      if significant && self.flags.auto_shutdown() == AutoShutdown::AnySignificant {
        tracing::debug!(supervisor = %ctx.pid(), child = %id, "significant child finished, shutting down");
        ctx.stop(ExitReason::Shutdown);
      }
      return Ok(());
    }
    self.restart_after(ctx, index)
  }

  fn restart_after(&mut self, ctx: &ProcessContext, failed: usize) -> Result<(), ProcessError> {
    let affected = match self.flags.strategy() {
      | Strategy::OneForOne => failed..failed + 1,
      | Strategy::OneForAll => 0..self.children.len(),
      | Strategy::RestForOne => failed..self.children.len(),
    };

    for index in affected.clone().rev() {
      if index == failed {
        continue;
      }
      let child = &mut self.children[index];
      if let Some(handle) = child.handle.take() {
        let _ = child.spec.shutdown().terminate(&handle);
      }
    }

    let failed_id = self.children[failed].spec.id().clone();
    let ids: Vec<ChildId> = self.children[affected].iter().map(|child| child.spec.id().clone()).collect();
    for id in ids {
      let Some(index) = self.index_of_id(&id) else {
        continue;
      };
      if id != failed_id && self.children[index].spec.restart() == RestartPolicy::Temporary {
        self.children.remove(index);
        continue;
      }
      self.restart_child(ctx, index)?;
    }
    Ok(())
  }

  fn restart_child(&mut self, ctx: &ProcessContext, index: usize) -> Result<(), ProcessError> {
    loop {
      if !self.tracker.record(Instant::now()) {
        tracing::error!(
          supervisor = %ctx.pid(),
          intensity = ?self.flags.intensity(),
          "restart intensity exceeded, escalating"
        );
        ctx.runtime().events().enqueue(SupervisionEvent::RestartIntensityExceeded { supervisor: ctx.pid() });
        return Err(ProcessError::RestartIntensityExceeded);
      }
      let child = &mut self.children[index];
      match child.spec.spawn(ctx) {
        | Ok(handle) => {
          let pid = handle.pid();
          tracing::info!(supervisor = %ctx.pid(), child = %child.spec.id(), %pid, "child restarted");
          ctx.runtime().events().enqueue(SupervisionEvent::ChildRestarted {
            supervisor: ctx.pid(),
            child: child.spec.id().clone(),
            pid,
          });
          child.handle = Some(handle);
          return Ok(());
        },
        | Err(error) => {
          tracing::warn!(supervisor = %ctx.pid(), child = %child.spec.id(), %error, "restart attempt failed");
        },
      }
    }
  }
}

impl Process for Supervisor {
  fn init(&mut self, ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    let specs = std::mem::take(&mut self.initial);
    for spec in specs {
      let id = spec.id().clone();
      match self.start_child(ctx, spec) {
        | Ok(_) => {},
        | Err(error) => {
          self.shutdown_all(ctx);
          return Err(match error {
            | SupervisorError::StartFailed { id, source } => ProcessError::ChildStart { id, source: Box::new(source) },
            | other => ProcessError::failed(format!("child {id}: {other}")),
          });
        },
      }
    }
    Ok(())
  }

  fn handle_call(&mut self, ctx: &mut ProcessContext, request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    let request =
      request.downcast::<SupervisorRequest>().map_err(|_| ProcessError::UnexpectedMessage("supervisor call"))?;
    let reply = match *request {
      | SupervisorRequest::StartChild(spec) => SupervisorReply::Started(self.start_child(ctx, spec)),
      | SupervisorRequest::TerminateChild(id) => SupervisorReply::Terminated(self.terminate_child(ctx, &id)),
      | SupervisorRequest::WhichChildren => SupervisorReply::Children(self.children.iter().map(Child::info).collect()),
      | SupervisorRequest::CountChildren => SupervisorReply::Count(self.children.len()),
    };
    Ok(Box::new(reply))
  }

  fn handle_exit(&mut self, ctx: &mut ProcessContext, pid: Pid, reason: &ExitReason) -> Result<(), ProcessError> {
    match self.index_of_pid(pid) {
      | Some(index) => self.on_child_exit(ctx, index, reason),
      | None => Ok(()),
    }
  }

  fn terminate(&mut self, ctx: &mut ProcessContext, reason: &ExitReason) {
    tracing::debug!(supervisor = %ctx.pid(), %reason, children = self.children.len(), "supervisor terminating");
    self.shutdown_all(ctx);
  }
}
