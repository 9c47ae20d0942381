//! Port contracts for metrics orchestration.
//!
//! Ports define infrastructure-agnostic interfaces used by the reporting
//! service.

pub mod cache;

pub use cache::{ReportCache, ReportCacheKey};
