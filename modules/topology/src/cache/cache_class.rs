use core::fmt::{Display, Formatter, Result as FmtResult};

/// Kind of asset held by a cache store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheClass {
  /// Fonts, images and other assets that never change once loaded.
  Static,
  /// Assets replaced while the application runs, such as video frames.
  Stream,
}

impl CacheClass {
  /// Every class, in start order.
  pub const ALL: [CacheClass; 2] = [CacheClass::Static, CacheClass::Stream];

  /// Name the store of this class registers under.
  #[must_use]
  pub const fn registered_name(self) -> &'static str {
    match self {
      | CacheClass::Static => "scenic.cache.static",
      | CacheClass::Stream => "scenic.cache.stream",
    }
  }

  /// Child identifier under the cache supervisor.
  #[must_use]
  pub const fn child_id(self) -> &'static str {
    match self {
      | CacheClass::Static => "static",
      | CacheClass::Stream => "stream",
    }
  }
}

impl Display for CacheClass {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str(self.child_id())
  }
}
