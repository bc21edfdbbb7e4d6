//! ViewPort subtrees and the two pools hosting them.
//!
//! Each ViewPort runs as a small subtree: the ViewPort worker, registered under the configured name, next to a
//! supervisor of its Drivers. The subtree is restarted as a unit by whichever pool owns it, so a failure never
//! reaches the cache, the lookup table or another ViewPort.

mod driver_factory;
mod driver_registry;
mod dynamic_viewport_error;
mod dynamic_viewport_supervisor;
mod static_viewport_supervisor;
mod viewport_env;
mod viewport_handle;
mod viewport_request;
mod viewport_subtree;
mod viewport_worker;

pub use driver_factory::DriverFactory;
pub use driver_registry::DriverRegistry;
pub use dynamic_viewport_error::DynamicViewPortError;
pub use dynamic_viewport_supervisor::DynamicViewPortSupervisor;
pub use static_viewport_supervisor::StaticViewPortSupervisor;
pub(crate) use viewport_env::ViewPortEnv;
pub use viewport_handle::ViewPortHandle;
pub use viewport_request::ViewPortInfo;
pub(crate) use viewport_request::ViewPortRequest;
pub(crate) use viewport_subtree::viewport_subtree;
pub use viewport_worker::ViewPort;
