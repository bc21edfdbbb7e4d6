use crate::registry::RegisteredName;

/// Structural configuration errors. They are fatal at boot and returned synchronously by runtime additions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  /// A ViewPort has an empty name.
  #[error("viewport name is missing")]
  MissingName,
  /// A ViewPort has a zero dimension.
  #[error("viewport {name} has invalid size {width}x{height}")]
  InvalidSize {
    /// ViewPort name.
    name:   RegisteredName,
    /// Configured width.
    width:  u32,
    /// Configured height.
    height: u32,
  },
  /// A driver descriptor has no module reference.
  #[error("viewport {viewport} has a driver without module")]
  MissingDriverModule {
    /// ViewPort name.
    viewport: RegisteredName,
  },
  /// Two drivers of the same ViewPort share a name.
  #[error("viewport {viewport} declares driver {driver} twice")]
  DuplicateDriver {
    /// ViewPort name.
    viewport: RegisteredName,
    /// Repeated driver name.
    driver:   String,
  },
  /// No factory is registered for the driver module.
  #[error("viewport {viewport} references unknown driver module {module}")]
  UnknownDriverModule {
    /// ViewPort name.
    viewport: RegisteredName,
    /// Module reference.
    module:   String,
  },
  /// Two boot-time ViewPorts share a name.
  #[error("viewport {0} is configured twice")]
  DuplicateViewPort(RegisteredName),
}
