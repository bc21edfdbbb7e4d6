/// Which siblings are restarted together with a failed child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
  /// Only the failed child.
  #[default]
  OneForOne,
  /// Every child.
  OneForAll,
  /// The failed child and every child started after it.
  RestForOne,
}
