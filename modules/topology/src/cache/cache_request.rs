#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CacheRequest {
  Put { key: String, data: Vec<u8> },
  Get(String),
  Delete(String),
  Keys,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CacheReply {
  /// Whether an entry was replaced.
  Stored(bool),
  Entry(Option<Vec<u8>>),
  /// Whether an entry existed.
  Deleted(bool),
  Keys(Vec<String>),
}
