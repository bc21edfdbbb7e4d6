//! Supervisors and the declarative description of their children.

mod auto_shutdown;
mod child_id;
mod child_info;
mod child_kind;
mod child_spec;
mod event_publisher;
mod restart_policy;
mod restart_tracker;
mod shutdown;
mod strategy;
mod supervision_event;
mod supervisor;
mod supervisor_error;
mod supervisor_flags;
mod supervisor_handle;
mod supervisor_request;

pub use auto_shutdown::AutoShutdown;
pub use child_id::ChildId;
pub use child_info::ChildInfo;
pub use child_kind::ChildKind;
pub use child_spec::{ChildSpec, StartFn};
pub use event_publisher::SupervisionEventPublisher;
pub use restart_policy::RestartPolicy;
pub use restart_tracker::RestartTracker;
pub use shutdown::Shutdown;
pub use strategy::Strategy;
pub use supervision_event::SupervisionEvent;
pub use supervisor::Supervisor;
pub use supervisor_error::SupervisorError;
pub use supervisor_flags::SupervisorFlags;
pub use supervisor_handle::SupervisorHandle;
pub(crate) use supervisor_request::{SupervisorReply, SupervisorRequest};
