//! Root coordinator composing the lookup table, the cache subtree and the ViewPort pools.

mod root_coordinator;
mod root_handle;
mod startup_error;
mod tree_shape;

pub use root_coordinator::RootCoordinator;
pub use root_handle::RootHandle;
pub use startup_error::StartupError;
pub use tree_shape::TreeShape;
