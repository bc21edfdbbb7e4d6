use core::fmt::{Display, Formatter, Result as FmtResult};

/// Runtime-unique process identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(u64);

impl Pid {
  /// Wraps a raw identifier.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw identifier.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.0
  }
}

impl Display for Pid {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "<{}>", self.0)
  }
}
