use core::time::Duration;

use crate::config::RestartIntensity;

#[test]
fn default_allows_three_restarts_in_five_seconds() {
  let intensity = RestartIntensity::default();

  assert_eq!(3, intensity.max_restarts());
  assert_eq!(Duration::from_secs(5), intensity.within());
}

#[test]
fn escalate_immediately_allows_no_restart() {
  assert_eq!(0, RestartIntensity::escalate_immediately().max_restarts());
}
