use crate::{process::ExitReason, supervision::RestartPolicy};

#[test]
fn permanent_restarts_on_every_exit() {
  assert!(RestartPolicy::Permanent.should_restart(&ExitReason::Normal));
  assert!(RestartPolicy::Permanent.should_restart(&ExitReason::Shutdown));
  assert!(RestartPolicy::Permanent.should_restart(&ExitReason::Killed));
}

#[test]
fn temporary_never_restarts() {
  assert!(!RestartPolicy::Temporary.should_restart(&ExitReason::Normal));
  assert!(!RestartPolicy::Temporary.should_restart(&ExitReason::crashed("boom")));
}

#[test]
fn transient_restarts_only_after_abnormal_exit() {
  assert!(!RestartPolicy::Transient.should_restart(&ExitReason::Normal));
  assert!(!RestartPolicy::Transient.should_restart(&ExitReason::Shutdown));
  assert!(RestartPolicy::Transient.should_restart(&ExitReason::Killed));
  assert!(RestartPolicy::Transient.should_restart(&ExitReason::MaxRestartIntensity));
}

#[test]
fn default_policy_is_permanent() {
  assert_eq!(RestartPolicy::Permanent, RestartPolicy::default());
}
