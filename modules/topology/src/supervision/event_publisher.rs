use std::{
  collections::VecDeque,
  sync::{Mutex, PoisonError},
};

use crate::supervision::SupervisionEvent;


const DEFAULT_CAPACITY: usize = 1024;

/// Bounded queue of supervision events waiting to be drained; the oldest event is dropped when full.
pub struct SupervisionEventPublisher {
  queue:    Mutex<VecDeque<SupervisionEvent>>,
  capacity: usize,
}

impl SupervisionEventPublisher {
  /// Creates a publisher with the default capacity.
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates a publisher holding at most `capacity` pending events.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { queue: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))), capacity: capacity.max(1) }
  }

  /// Enqueues an event.
  pub fn enqueue(&self, event: SupervisionEvent) {
    let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
    if queue.len() == self.capacity {
      queue.pop_front();
    }
    queue.push_back(event);
  }

  /// Drains all pending events.
  pub fn drain(&self) -> Vec<SupervisionEvent> {
    self.queue.lock().unwrap_or_else(PoisonError::into_inner).drain(..).collect()
  }
}

impl Default for SupervisionEventPublisher {
  fn default() -> Self {
    Self::new()
  }
}
