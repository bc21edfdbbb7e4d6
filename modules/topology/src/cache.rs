//! Asset cache subtree shared by every ViewPort.

mod cache_class;
mod cache_client;
mod cache_request;
mod cache_store;
mod cache_supervisor;

pub use cache_class::CacheClass;
pub use cache_client::CacheClient;
pub(crate) use cache_request::{CacheReply, CacheRequest};
pub use cache_store::CacheStore;
pub use cache_supervisor::CacheSupervisor;
