use core::fmt::{Debug, Formatter, Result as FmtResult};
use std::{collections::HashMap, sync::Arc};

use crate::{
  config::{ConfigError, DriverConfig, ViewPortConfig},
  process::Process,
  registry::RegisteredName,
  viewport::DriverFactory,
};


/// Application-provided mapping from driver module references to factories.
#[derive(Clone, Default)]
pub struct DriverRegistry {
  factories: HashMap<String, Arc<dyn DriverFactory>>,
}

impl DriverRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a closure factory for `module`, replacing any previous one.
  #[must_use]
  pub fn with_driver<F>(mut self, module: impl Into<String>, factory: F) -> Self
  where
    F: Fn(&RegisteredName, &DriverConfig) -> Box<dyn Process> + Send + Sync + 'static, {
    self.register(module, Arc::new(factory));
    self
  }

  /// Registers `factory` for `module`, returning the factory it replaced.
  pub fn register(
    &mut self,
    module: impl Into<String>,
    factory: Arc<dyn DriverFactory>,
  ) -> Option<Arc<dyn DriverFactory>> {
    self.factories.insert(module.into(), factory)
  }

  /// Factory registered for `module`.
  #[must_use]
  pub fn factory(&self, module: &str) -> Option<Arc<dyn DriverFactory>> {
    self.factories.get(module).cloned()
  }

  /// Whether `module` has a factory.
  #[must_use]
  pub fn contains(&self, module: &str) -> bool {
    self.factories.contains_key(module)
  }

  /// Registered modules, sorted.
  #[must_use]
  pub fn modules(&self) -> Vec<&str> {
    let mut modules: Vec<&str> = self.factories.keys().map(String::as_str).collect();
    modules.sort_unstable();
    modules
  }

  /// Ensures every driver of `config` refers to a registered module.
  pub(crate) fn check(&self, config: &ViewPortConfig) -> Result<(), ConfigError> {
    match config.drivers().iter().find(|driver| !self.contains(driver.module())) {
      | Some(driver) => Err(ConfigError::UnknownDriverModule {
        viewport: config.name().clone(),
        module:   driver.module().to_owned(),
      }),
      | None => Ok(()),
    }
  }
}

impl Debug for DriverRegistry {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("DriverRegistry").field("modules", &self.modules()).finish()
  }
}
