use crate::{
  config::{ConfigError, DriverConfig, SceneRef, ViewPortConfig, ViewPortSize},
  registry::RegisteredName,
};

/// Builder used to compose [`ViewPortConfig`] instances.
#[derive(Clone, Debug)]
pub struct ViewPortConfigBuilder {
  name:          RegisteredName,
  size:          ViewPortSize,
  default_scene: Option<SceneRef>,
  drivers:       Vec<DriverConfig>,
}

impl ViewPortConfigBuilder {
  pub(crate) const fn new(name: RegisteredName) -> Self {
    Self { name, size: ViewPortSize::new(0, 0), default_scene: None, drivers: Vec::new() }
  }

  /// Sets the ViewPort size.
  #[must_use]
  pub const fn size(mut self, width: u32, height: u32) -> Self {
    self.size = ViewPortSize::new(width, height);
    self
  }

  /// Sets the scene shown at start.
  #[must_use]
  pub fn default_scene(mut self, scene: SceneRef) -> Self {
    self.default_scene = Some(scene);
    self
  }

  /// Appends a driver.
  #[must_use]
  pub fn driver(mut self, driver: DriverConfig) -> Self {
    self.drivers.push(driver);
    self
  }

  /// Finalizes and validates the configuration.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] when a structural invariant is violated.
  pub fn build(self) -> Result<ViewPortConfig, ConfigError> {
    let config = ViewPortConfig::new(self.name, self.size, self.default_scene, self.drivers);
    config.validate()?;
    Ok(config)
  }
}
