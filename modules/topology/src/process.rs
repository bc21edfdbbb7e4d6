//! Lightweight processes backed by dedicated threads.
//!
//! A process owns private state behind a mailbox. Other components only reach it through
//! [`ProcessHandle::call`] and [`ProcessHandle::cast`], or through lifecycle signals (stop, kill and exit
//! notifications delivered to the linked parent).

mod any_message;
mod behavior;
mod call_error;
mod envelope;
mod exit_reason;
mod pid;
mod process_cell;
mod process_context;
mod process_error;
mod process_handle;
mod process_runtime;
mod request_error;
mod spawn_error;
mod spawn_options;

pub use any_message::AnyMessage;
pub use behavior::Process;
pub use call_error::CallError;
pub(crate) use envelope::Envelope;
pub use exit_reason::ExitReason;
pub use pid::Pid;
pub(crate) use process_cell::ProcessCell;
pub use process_context::ProcessContext;
pub use process_error::ProcessError;
pub use process_handle::ProcessHandle;
pub use process_runtime::ProcessRuntime;
pub use request_error::RequestError;
pub use spawn_error::SpawnError;
pub use spawn_options::SpawnOptions;
