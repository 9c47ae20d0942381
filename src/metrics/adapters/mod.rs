//! Adapter implementations of the metrics ports.

pub mod memory;
