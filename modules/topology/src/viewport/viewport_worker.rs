use crate::{
  config::ViewPortConfig,
  lookup::LookupTableClient,
  process::{AnyMessage, ExitReason, Process, ProcessContext, ProcessError},
  viewport::{ViewPortInfo, ViewPortRequest},
};

/// Worker process of a ViewPort, registered under the configured name.
///
/// On start it records itself as the owner of its default scene in the lookup table and releases that ownership
/// when it terminates. An unreachable lookup table is logged and does not prevent the ViewPort from running.
pub struct ViewPort {
  config: ViewPortConfig,
}

impl ViewPort {
  /// Creates the worker for `config`.
  #[must_use]
  pub const fn new(config: ViewPortConfig) -> Self {
    Self { config }
  }

  /// Configuration the worker was started with.
  #[must_use]
  pub const fn config(&self) -> &ViewPortConfig {
    &self.config
  }

  fn info(&self) -> ViewPortInfo {
    ViewPortInfo {
      name:          self.config.name().clone(),
      size:          self.config.size(),
      default_scene: self.config.default_scene().cloned(),
      drivers:       self.config.drivers().iter().map(|driver| driver.name().to_owned()).collect(),
    }
  }
}

impl Process for ViewPort {
  fn init(&mut self, ctx: &mut ProcessContext) -> Result<(), ProcessError> {
    let name = self.config.name();
    if let Some(scene) = self.config.default_scene() {
      let lookup = LookupTableClient::new(ctx.runtime().clone());
      if let Err(error) = lookup.put_owner(scene.scene(), name.clone()) {
        tracing::warn!(pid = %ctx.pid(), %name, %error, "could not record scene ownership");
      }
    }
    tracing::debug!(pid = %ctx.pid(), %name, size = ?self.config.size(), "viewport started");
    Ok(())
  }

  fn handle_call(&mut self, _ctx: &mut ProcessContext, request: AnyMessage) -> Result<AnyMessage, ProcessError> {
    let request =
      request.downcast::<ViewPortRequest>().map_err(|_| ProcessError::UnexpectedMessage("viewport call"))?;
    match *request {
      | ViewPortRequest::Info => Ok(Box::new(self.info())),
    }
  }

  fn terminate(&mut self, ctx: &mut ProcessContext, reason: &ExitReason) {
    let name = self.config.name();
    if self.config.default_scene().is_some() {
      let lookup = LookupTableClient::new(ctx.runtime().clone());
      if let Err(error) = lookup.release_owner_async(name) {
        tracing::debug!(pid = %ctx.pid(), %name, %error, "scene ownership not released");
      }
    }
    tracing::debug!(pid = %ctx.pid(), %name, %reason, "viewport stopped");
  }
}
