use crossbeam_channel::Sender;

use crate::process::{AnyMessage, ExitReason, Pid};

/// Mailbox entry delivered to a running process.
pub(crate) enum Envelope {
  Call { request: AnyMessage, reply_to: Sender<AnyMessage> },
  Cast(AnyMessage),
  Exit { pid: Pid, reason: ExitReason },
  Stop,
  Kill,
}
