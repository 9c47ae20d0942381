//! In-memory snapshot adapters for tests and embedding.

mod provider;

pub use provider::InMemorySnapshotProvider;
