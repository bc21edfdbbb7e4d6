use core::time::Duration;

use crate::{
  cache::{CacheClass, CacheStore},
  config::RestartIntensity,
  supervision::{ChildSpec, Strategy, Supervisor, SupervisorFlags},
};

#[cfg(test)]
mod tests;

/// Nested subtree owning one [`CacheStore`] per [`CacheClass`], restarted one-for-one.
pub struct CacheSupervisor;

impl CacheSupervisor {
  /// Name the cache supervisor registers under.
  pub const NAME: &'static str = "scenic.cache";
  /// Child identifier under the root coordinator.
  pub const CHILD_ID: &'static str = "cache";

  /// Builds the supervisor process with its stores, each bounded by `boot_window` at start.
  #[must_use]
  pub fn supervisor(intensity: RestartIntensity, boot_window: Duration) -> Supervisor {
    Supervisor::new(SupervisorFlags::new(Strategy::OneForOne, intensity), Self::stores(boot_window))
  }

  pub(crate) fn child_spec(intensity: RestartIntensity, boot_window: Duration) -> ChildSpec {
    let budget = ChildSpec::boot_budget(&Self::stores(boot_window), boot_window);
    ChildSpec::supervisor(Self::CHILD_ID, move || Box::new(Self::supervisor(intensity, boot_window)))
      .with_name(Self::NAME)
      .with_init_timeout(budget)
  }

  fn stores(boot_window: Duration) -> Vec<ChildSpec> {
    CacheClass::ALL.into_iter().map(|class| CacheStore::child_spec(class, boot_window)).collect()
  }
}
