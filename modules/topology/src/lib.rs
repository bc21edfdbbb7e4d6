//! Supervision topology for a client-side rendering runtime.
//!
//! The crate boots a root coordinator that owns a shared lookup table, the asset cache subtree and the ViewPort
//! pools. Every component runs as an isolated process with private state, reached only through message passing
//! and supervised according to one-for-one fault isolation.

#![warn(missing_docs)]

/// Startup options, ViewPort configuration and restart intensities.
pub mod config;
/// Process runtime: spawning, mailboxes, handles and exit reasons.
pub mod process;
/// Named process registry.
pub mod registry;
/// Supervisors, child specifications and restart policies.
pub mod supervision;
/// Shared lookup table of scene ownership.
pub mod lookup;
/// Asset cache subtree.
pub mod cache;
/// ViewPort subtrees, driver registry and the static/dynamic ViewPort pools.
pub mod viewport;
/// Root coordinator composing the whole tree.
pub mod root;

#[cfg(test)]
mod test_support;
