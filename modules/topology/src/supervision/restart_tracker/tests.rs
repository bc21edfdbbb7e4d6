use core::time::Duration;
use std::time::Instant;

use crate::{config::RestartIntensity, supervision::RestartTracker};

#[test]
fn allows_restarts_up_to_the_limit() {
  let mut tracker = RestartTracker::new(RestartIntensity::new(2, Duration::from_secs(10)));
  let now = Instant::now();

  assert!(tracker.record(now));
  assert!(tracker.record(now + Duration::from_millis(1)));
  assert!(!tracker.record(now + Duration::from_millis(2)));
}

#[test]
fn restarts_outside_the_window_are_forgotten() {
  let mut tracker = RestartTracker::new(RestartIntensity::new(1, Duration::from_millis(100)));
  let now = Instant::now();

  assert!(tracker.record(now));
  assert!(tracker.record(now + Duration::from_millis(150)));
  assert_eq!(1, tracker.recent());
}

#[test]
fn zero_intensity_rejects_the_first_restart() {
  let mut tracker = RestartTracker::new(RestartIntensity::escalate_immediately());

  assert!(!tracker.record(Instant::now()));
}
