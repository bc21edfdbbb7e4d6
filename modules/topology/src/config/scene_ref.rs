use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque reference to the scene a ViewPort shows first, plus its opaque init argument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneRef {
  scene: String,
  #[serde(default)]
  args:  Value,
}

impl SceneRef {
  /// Scene without init argument.
  #[must_use]
  pub fn new(scene: impl Into<String>) -> Self {
    Self { scene: scene.into(), args: Value::Null }
  }

  /// Attaches the init argument handed to the scene.
  #[must_use]
  pub fn with_args(mut self, args: Value) -> Self {
    self.args = args;
    self
  }

  /// Scene reference, also used as the graph key in the lookup table.
  #[must_use]
  pub fn scene(&self) -> &str {
    &self.scene
  }

  /// Init argument.
  #[must_use]
  pub const fn args(&self) -> &Value {
    &self.args
  }
}
