use crate::process::{ExitReason, ProcessError};

#[test]
fn normal_and_shutdown_are_not_abnormal() {
  assert!(ExitReason::Normal.is_normal());
  assert!(ExitReason::Shutdown.is_normal());
  assert!(ExitReason::Killed.is_abnormal());
  assert!(ExitReason::crashed("boom").is_abnormal());
  assert!(ExitReason::MaxRestartIntensity.is_abnormal());
}

#[test]
fn restart_intensity_error_maps_to_dedicated_reason() {
  assert_eq!(ExitReason::MaxRestartIntensity, ExitReason::from(ProcessError::RestartIntensityExceeded));
}

#[test]
fn other_errors_become_crashes_with_message() {
  let reason = ExitReason::from(ProcessError::failed("disk gone"));

  assert_eq!(ExitReason::crashed("disk gone"), reason);
  assert_eq!("crashed: disk gone", reason.to_string());
}
