//! Configuration consumed by the root coordinator at boot.

mod config_error;
mod driver_config;
mod restart_intensity;
mod scene_ref;
mod startup_options;
mod startup_options_builder;
mod viewport_config;
mod viewport_config_builder;
mod viewport_size;

pub use config_error::ConfigError;
pub use driver_config::DriverConfig;
pub use restart_intensity::RestartIntensity;
pub use scene_ref::SceneRef;
pub use startup_options::StartupOptions;
pub use startup_options_builder::StartupOptionsBuilder;
pub use viewport_config::ViewPortConfig;
pub use viewport_config_builder::ViewPortConfigBuilder;
pub use viewport_size::ViewPortSize;
