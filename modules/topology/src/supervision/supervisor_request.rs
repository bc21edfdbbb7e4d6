use crate::{
  process::Pid,
  supervision::{ChildId, ChildInfo, ChildSpec, SupervisorError},
};

/// Requests understood by [`Supervisor`](crate::supervision::Supervisor).
pub(crate) enum SupervisorRequest {
  StartChild(ChildSpec),
  TerminateChild(ChildId),
  WhichChildren,
  CountChildren,
}

/// Replies produced by [`Supervisor`](crate::supervision::Supervisor).
pub(crate) enum SupervisorReply {
  Started(Result<Pid, SupervisorError>),
  Terminated(Result<(), SupervisorError>),
  Children(Vec<ChildInfo>),
  Count(usize),
}
