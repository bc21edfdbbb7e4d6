use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  config::{ConfigError, DriverConfig, SceneRef, ViewPortConfigBuilder, ViewPortSize},
  registry::RegisteredName,
};

#[cfg(test)]
mod tests;

/// Description of one ViewPort. The name doubles as the ViewPort process's registered name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewPortConfig {
  name:          RegisteredName,
  size:          ViewPortSize,
  #[serde(default)]
  default_scene: Option<SceneRef>,
  #[serde(default)]
  drivers:       Vec<DriverConfig>,
}

impl ViewPortConfig {
  pub(crate) fn new(
    name: RegisteredName,
    size: ViewPortSize,
    default_scene: Option<SceneRef>,
    drivers: Vec<DriverConfig>,
  ) -> Self {
    Self { name, size, default_scene, drivers }
  }

  /// Starts a builder for a ViewPort named `name`.
  #[must_use]
  pub fn builder(name: impl Into<RegisteredName>) -> ViewPortConfigBuilder {
    ViewPortConfigBuilder::new(name.into())
  }

  /// ViewPort name.
  #[must_use]
  pub const fn name(&self) -> &RegisteredName {
    &self.name
  }

  /// ViewPort size.
  #[must_use]
  pub const fn size(&self) -> ViewPortSize {
    self.size
  }

  /// Scene shown at start.
  #[must_use]
  pub const fn default_scene(&self) -> Option<&SceneRef> {
    self.default_scene.as_ref()
  }

  /// Drivers in start order.
  #[must_use]
  pub fn drivers(&self) -> &[DriverConfig] {
    &self.drivers
  }

  /// Checks the structural invariants: non-empty name, positive size, drivers with modules and distinct names.
  ///
  /// # Errors
  ///
  /// Returns the first violated invariant.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.name.is_empty() {
      return Err(ConfigError::MissingName);
    }
    if !self.size.is_positive() {
      return Err(ConfigError::InvalidSize {
        name:   self.name.clone(),
        width:  self.size.width,
        height: self.size.height,
      });
    }
    let mut seen = HashSet::new();
    for driver in &self.drivers {
      if driver.module().trim().is_empty() {
        return Err(ConfigError::MissingDriverModule { viewport: self.name.clone() });
      }
      if !seen.insert(driver.name()) {
        return Err(ConfigError::DuplicateDriver { viewport: self.name.clone(), driver: driver.name().to_string() });
      }
    }
    Ok(())
  }
}
