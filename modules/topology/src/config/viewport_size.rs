use serde::{Deserialize, Serialize};

/// Width and height of a ViewPort in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewPortSize {
  /// Horizontal extent.
  pub width:  u32,
  /// Vertical extent.
  pub height: u32,
}

impl ViewPortSize {
  /// Creates a size.
  #[must_use]
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// Both dimensions are positive.
  #[must_use]
  pub const fn is_positive(&self) -> bool {
    self.width > 0 && self.height > 0
  }
}
