use std::{
  collections::HashMap,
  sync::{PoisonError, RwLock},
};

use crate::{
  process::{Pid, ProcessHandle},
  registry::{RegisteredName, RegistryError},
};

#[cfg(test)]
mod tests;

/// Name table binding symbolic names to live processes.
///
/// Registrations are weak: a name is released as soon as its holder terminates, and lookups only ever return
/// processes that are still running.
#[derive(Default)]
pub struct ProcessRegistry {
  entries: RwLock<HashMap<RegisteredName, ProcessHandle>>,
}

impl ProcessRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: RwLock::new(HashMap::new()) }
  }

  /// Binds `name` to `handle`.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::AlreadyRegistered`] when a live process already holds the name.
  pub fn register(&self, name: RegisteredName, handle: ProcessHandle) -> Result<(), RegistryError> {
    let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(current) = entries.get(&name) {
      if current.is_alive() {
        return Err(RegistryError::AlreadyRegistered { name, holder: current.pid() });
      }
    }
    entries.insert(name, handle);
    Ok(())
  }

  /// Resolves `name` to the live process holding it.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] when nothing live holds the name.
  pub fn resolve(&self, name: &RegisteredName) -> Result<ProcessHandle, RegistryError> {
    let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
    match entries.get(name) {
      | Some(handle) if handle.is_alive() => Ok(handle.clone()),
      | _ => Err(RegistryError::NotFound(name.clone())),
    }
  }

  /// Returns true when a live process holds `name`.
  #[must_use]
  pub fn is_registered(&self, name: &RegisteredName) -> bool {
    self.resolve(name).is_ok()
  }

  /// Lists the names held by live processes, sorted.
  #[must_use]
  pub fn names(&self) -> Vec<RegisteredName> {
    let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<RegisteredName> =
      entries.iter().filter(|(_, handle)| handle.is_alive()).map(|(name, _)| name.clone()).collect();
    names.sort();
    names
  }

  /// Drops every registration held by `pid`, returning the released names.
  pub(crate) fn release(&self, pid: Pid) -> Vec<RegisteredName> {
    let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
    let mut released = Vec::new();
    entries.retain(|name, handle| {
      if handle.pid() == pid {
        released.push(name.clone());
        false
      } else {
        true
      }
    });
    released
  }
}
