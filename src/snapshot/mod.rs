//! Read-only project data snapshots.
//!
//! A snapshot is the composite input the metrics engine consumes: one
//! project record plus its task, milestone, and member collections, loaded
//! and filtered by an external persistence layer. The engine never queries
//! a store itself and never mutates snapshot data. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
