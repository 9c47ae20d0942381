//! Project health metrics for Pharos.
//!
//! This module houses the scoring engine: schedule progress, budget burn,
//! team utilization, and the composite health assessment, plus the
//! reporting service that feeds it from a snapshot provider and
//! optionally memoizes results. Every calculator is a pure, total
//! function over its snapshot inputs: identical inputs always produce the
//! identical report, and concurrent invocations never interact. The
//! module follows hexagonal architecture:
//!
//! - Domain calculators and report types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
