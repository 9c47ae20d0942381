//! Milestone-level snapshot record and status.

use super::{MilestoneId, ParseMilestoneStatusError, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milestone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Milestone has not been reached.
    Pending,
    /// Milestone has been reached.
    Completed,
}

impl MilestoneStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for MilestoneStatus {
    type Error = ParseMilestoneStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseMilestoneStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only milestone record as supplied by the external data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSnapshot {
    /// Milestone identifier.
    pub id: MilestoneId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Target date, if planned.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the milestone gates delivery.
    pub is_critical: bool,
    /// Reported completion percentage in [0, 100].
    pub completion_percentage: f64,
    /// Milestone status.
    pub status: MilestoneStatus,
}

impl MilestoneSnapshot {
    /// Creates a pending milestone record.
    #[must_use]
    pub const fn new(id: MilestoneId, project_id: ProjectId) -> Self {
        Self {
            id,
            project_id,
            due_date: None,
            is_critical: false,
            completion_percentage: 0.0,
            status: MilestoneStatus::Pending,
        }
    }

    /// Sets the target date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Marks the milestone as delivery-gating.
    #[must_use]
    pub const fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }

    /// Marks the milestone as reached.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.status = MilestoneStatus::Completed;
        self.completion_percentage = 100.0;
        self
    }

    /// Sets the reported completion percentage.
    #[must_use]
    pub const fn with_completion_percentage(mut self, completion_percentage: f64) -> Self {
        self.completion_percentage = completion_percentage;
        self
    }

    /// Returns `true` when the target date has passed and the milestone
    /// has not been reached.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now) && self.status != MilestoneStatus::Completed
    }
}
