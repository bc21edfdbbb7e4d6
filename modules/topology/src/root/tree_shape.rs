use std::sync::Arc;

use crate::{
  cache::CacheSupervisor,
  config::{ConfigError, StartupOptions, ViewPortConfig},
  lookup::LookupTable,
  supervision::ChildSpec,
  viewport::{DynamicViewPortSupervisor, StaticViewPortSupervisor, ViewPortEnv},
};

#[cfg(test)]
mod tests;

/// Shape of the root's child list, fixed when the root starts.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeShape {
  /// Lookup table, cache supervisor and dynamic pool.
  Minimal,
  /// [`TreeShape::Minimal`] plus a static pool hosting these ViewPorts, in order.
  WithStatic(Vec<ViewPortConfig>),
}

impl TreeShape {
  /// Shape for the given boot-time ViewPorts.
  #[must_use]
  pub fn from_viewports(viewports: &[ViewPortConfig]) -> Self {
    if viewports.is_empty() {
      TreeShape::Minimal
    } else {
      TreeShape::WithStatic(viewports.to_vec())
    }
  }

  /// Number of children the root supervises.
  #[must_use]
  pub const fn child_count(&self) -> usize {
    match self {
      | TreeShape::Minimal => 3,
      | TreeShape::WithStatic(_) => 4,
    }
  }

  /// Whether the static pool is part of the tree.
  #[must_use]
  pub const fn has_static(&self) -> bool {
    matches!(self, TreeShape::WithStatic(_))
  }

  /// Boot-time ViewPorts, empty for [`TreeShape::Minimal`].
  #[must_use]
  pub fn viewports(&self) -> &[ViewPortConfig] {
    match self {
      | TreeShape::Minimal => &[],
      | TreeShape::WithStatic(viewports) => viewports,
    }
  }

  /// Renders the shape into the root's children, in start order.
  pub(crate) fn child_specs(
    &self,
    options: &StartupOptions,
    env: &Arc<ViewPortEnv>,
  ) -> Result<Vec<ChildSpec>, ConfigError> {
    let boot_window = options.boot_window();
    let mut specs = Vec::with_capacity(self.child_count());
    specs.push(LookupTable::child_spec(boot_window));
    specs.push(CacheSupervisor::child_spec(options.cache_intensity(), boot_window));
    if let TreeShape::WithStatic(viewports) = self {
      specs.push(StaticViewPortSupervisor::child_spec(viewports, options.static_intensity(), env)?);
    }
    specs.push(DynamicViewPortSupervisor::child_spec(options.dynamic_intensity(), env));
    Ok(specs)
  }
}
