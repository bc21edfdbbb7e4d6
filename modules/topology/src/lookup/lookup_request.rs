use crate::registry::RegisteredName;

/// Requests understood by the [`LookupTable`](crate::lookup::LookupTable).
///
/// Every variant can be sent as a call; casts apply the request and drop the reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LookupRequest {
  PutOwner { key: String, viewport: RegisteredName },
  Owner(String),
  ReleaseOwner(RegisteredName),
  KeysOf(RegisteredName),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LookupReply {
  /// Previous owner of the key.
  Stored(Option<RegisteredName>),
  Owner(Option<RegisteredName>),
  /// Number of keys dropped.
  Released(usize),
  Keys(Vec<String>),
}
