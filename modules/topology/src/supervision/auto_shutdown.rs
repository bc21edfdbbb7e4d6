/// Whether a supervisor stops itself when significant children finish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoShutdown {
  /// Keep running regardless of children.
  #[default]
  Never,
  /// Shut down as soon as any significant child terminates without being restarted.
  AnySignificant,
}
