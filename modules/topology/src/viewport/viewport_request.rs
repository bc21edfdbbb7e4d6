use crate::{
  config::{SceneRef, ViewPortSize},
  registry::RegisteredName,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ViewPortRequest {
  Info,
}

/// Snapshot of a running ViewPort.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewPortInfo {
  /// Registered name.
  pub name:          RegisteredName,
  /// Current size.
  pub size:          ViewPortSize,
  /// Scene shown at start.
  pub default_scene: Option<SceneRef>,
  /// Driver names in start order.
  pub drivers:       Vec<String>,
}
