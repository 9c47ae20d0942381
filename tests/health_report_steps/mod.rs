//! Step definitions for health reporting BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
