use core::time::Duration;

use crate::registry::RegisteredName;

const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Options applied when spawning a process.
#[derive(Clone, Debug)]
pub struct SpawnOptions {
  name:         Option<RegisteredName>,
  init_timeout: Duration,
}

impl SpawnOptions {
  /// Unnamed process with the default boot window.
  #[must_use]
  pub const fn new() -> Self {
    Self { name: None, init_timeout: DEFAULT_INIT_TIMEOUT }
  }

  /// Registers the process under `name` for its whole lifetime.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<RegisteredName>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Bounds the synchronous `init` handshake.
  #[must_use]
  pub const fn with_init_timeout(mut self, timeout: Duration) -> Self {
    self.init_timeout = timeout;
    self
  }

  /// Name to register, if any.
  #[must_use]
  pub const fn name(&self) -> Option<&RegisteredName> {
    self.name.as_ref()
  }

  /// Boot window for `init`.
  #[must_use]
  pub const fn init_timeout(&self) -> Duration {
    self.init_timeout
  }
}

impl Default for SpawnOptions {
  fn default() -> Self {
    Self::new()
  }
}
