//! In-memory metrics adapters for tests and embedding.

mod cache;

pub use cache::InMemoryReportCache;
