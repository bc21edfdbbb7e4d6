/// Whether a child does work or supervises other children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildKind {
  /// Leaf process.
  Worker,
  /// Nested supervisor.
  Supervisor,
}
