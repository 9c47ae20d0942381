//! Adapter implementations of the snapshot ports.

pub mod memory;
