//! Process-wide registry of symbolic names.

mod process_registry;
mod registered_name;
mod registry_error;

pub use process_registry::ProcessRegistry;
pub use registered_name::RegisteredName;
pub use registry_error::RegistryError;
