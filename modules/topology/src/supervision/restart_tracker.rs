use std::{collections::VecDeque, time::Instant};

use crate::config::RestartIntensity;

#[cfg(test)]
mod tests;

/// Sliding-window restart counter of one supervisor.
#[derive(Clone, Debug)]
pub struct RestartTracker {
  intensity: RestartIntensity,
  restarts:  VecDeque<Instant>,
}

impl RestartTracker {
  /// Creates an empty tracker.
  #[must_use]
  pub const fn new(intensity: RestartIntensity) -> Self {
    Self { intensity, restarts: VecDeque::new() }
  }

  /// Records a restart at `now`; returns false once the intensity is exceeded.
  pub fn record(&mut self, now: Instant) -> bool {
    let window = self.intensity.within();
    while let Some(oldest) = self.restarts.front() {
      if now.saturating_duration_since(*oldest) >= window {
        self.restarts.pop_front();
      } else {
        break;
      }
    }
    self.restarts.push_back(now);
    self.restarts.len() <= self.intensity.max_restarts() as usize
  }

  /// Restarts currently inside the window.
  #[must_use]
  pub fn recent(&self) -> usize {
    self.restarts.len()
  }
}
