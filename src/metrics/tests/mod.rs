//! Unit tests for the metrics context.

mod support;
