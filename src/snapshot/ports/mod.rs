//! Port contracts for snapshot access.
//!
//! Ports define infrastructure-agnostic interfaces used to supply project
//! data to the metrics engine.

pub mod provider;

pub use provider::{SnapshotProvider, SnapshotProviderError, SnapshotProviderResult};
