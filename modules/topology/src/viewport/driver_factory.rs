use crate::{config::DriverConfig, process::Process, registry::RegisteredName};

/// Builds the process backing one Driver of a ViewPort.
///
/// Called again on every restart of the Driver, always with the descriptor it was configured with.
pub trait DriverFactory: Send + Sync + 'static {
  /// Creates a fresh driver process for `viewport`.
  fn start(&self, viewport: &RegisteredName, config: &DriverConfig) -> Box<dyn Process>;
}

impl<F> DriverFactory for F
where
  F: Fn(&RegisteredName, &DriverConfig) -> Box<dyn Process> + Send + Sync + 'static,
{
  fn start(&self, viewport: &RegisteredName, config: &DriverConfig) -> Box<dyn Process> {
    self(viewport, config)
  }
}
