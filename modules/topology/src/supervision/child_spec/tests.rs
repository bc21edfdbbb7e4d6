use core::time::Duration;

use crate::{process::Process, supervision::ChildSpec};

struct Idle;

impl Process for Idle {}

fn idle() -> Box<dyn Process> {
  Box::new(Idle)
}

#[test]
fn boot_budget_adds_child_windows_to_own_window() {
  let window = Duration::from_millis(300);
  let leaf = |id: &'static str| ChildSpec::worker(id, idle).with_init_timeout(window);
  let nested = ChildSpec::supervisor("nested", idle).with_init_timeout(Duration::from_secs(1));

  assert_eq!(window, ChildSpec::boot_budget(&[], window));
  assert_eq!(Duration::from_millis(900), ChildSpec::boot_budget(&[leaf("a"), leaf("b")], window));
  assert_eq!(Duration::from_millis(1600), ChildSpec::boot_budget(&[leaf("a"), nested], window));
}

#[test]
fn boot_budget_saturates() {
  let unbounded = ChildSpec::worker("slow", idle).with_init_timeout(Duration::MAX);

  assert_eq!(Duration::MAX, ChildSpec::boot_budget(&[unbounded], Duration::from_secs(1)));
}
