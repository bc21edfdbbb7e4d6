use core::fmt::{Display, Formatter, Result as FmtResult};

/// Identifier of a child, unique within its supervisor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(String);

impl ChildId {
  /// Creates an identifier.
  #[must_use]
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  /// Textual form.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for ChildId {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str(&self.0)
  }
}

impl From<&str> for ChildId {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for ChildId {
  fn from(value: String) -> Self {
    Self(value)
  }
}
