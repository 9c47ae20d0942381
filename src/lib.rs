//! Pharos: project health and delivery metrics engine.
//!
//! This crate computes composite health reports for service-delivery
//! projects from read-only snapshots of project data: schedule progress,
//! budget burn, team utilization, and an overall 0-100 health score with
//! risk and recommendation lists.
//!
//! # Architecture
//!
//! Pharos follows hexagonal architecture principles:
//!
//! - **Domain**: Pure computation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! The engine itself performs no I/O: callers load snapshot data through a
//! [`snapshot::ports::SnapshotProvider`] implementation and receive plain
//! serializable reports back.
//!
//! # Modules
//!
//! - [`snapshot`]: Read-only project data model and the provider port
//! - [`metrics`]: Progress, budget, team, and health calculators plus the
//!   reporting service

pub mod metrics;
pub mod snapshot;
