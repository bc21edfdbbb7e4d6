use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor of one Driver attached to a ViewPort.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
  module: String,
  name:   String,
  #[serde(default)]
  opts:   BTreeMap<String, Value>,
}

impl DriverConfig {
  /// Driver backed by the factory registered for `module`.
  #[must_use]
  pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
    Self { module: module.into(), name: name.into(), opts: BTreeMap::new() }
  }

  /// Adds one driver option.
  #[must_use]
  pub fn with_opt(mut self, key: impl Into<String>, value: Value) -> Self {
    self.opts.insert(key.into(), value);
    self
  }

  /// Module reference resolved through the driver registry.
  #[must_use]
  pub fn module(&self) -> &str {
    &self.module
  }

  /// Driver name, unique within its ViewPort.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Driver options, opaque to the topology.
  #[must_use]
  pub const fn opts(&self) -> &BTreeMap<String, Value> {
    &self.opts
  }
}
