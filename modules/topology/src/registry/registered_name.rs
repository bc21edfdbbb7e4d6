use core::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Process-wide unique symbolic name used to look a process up at call time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisteredName(String);

impl RegisteredName {
  /// Creates a name from the given value.
  #[must_use]
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  /// Returns the textual form of the name.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Returns true when the name carries no characters.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.trim().is_empty()
  }
}

impl Display for RegisteredName {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str(&self.0)
  }
}

impl From<&str> for RegisteredName {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for RegisteredName {
  fn from(value: String) -> Self {
    Self(value)
  }
}
