//! Error types for parsing snapshot enumerations from storage values.

use thiserror::Error;

/// Error returned while parsing project statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing milestone statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown milestone status: {0}")]
pub struct ParseMilestoneStatusError(pub String);
