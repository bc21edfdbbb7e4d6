//! Shared table recording which ViewPort owns which scene key.

mod lookup_request;
mod lookup_table;
mod lookup_table_client;

pub(crate) use lookup_request::{LookupReply, LookupRequest};
pub use lookup_table::LookupTable;
pub use lookup_table_client::LookupTableClient;
