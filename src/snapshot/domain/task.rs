//! Task-level snapshot record, workflow status, and priority.

use super::{ParseTaskPriorityError, ParseTaskStatusError, ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is queued and unstarted.
    Todo,
    /// Task is being worked.
    InProgress,
    /// Task is awaiting review.
    InReview,
    /// Task cannot proceed until a dependency clears.
    Blocked,
    /// Task work is finished.
    Completed,
    /// Task was closed without the completed transition.
    Closed,
    /// Task was abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "blocked" => Ok(Self::Blocked),
            "completed" => Ok(Self::Completed),
            "closed" => Ok(Self::Closed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can slip without consequence.
    Low,
    /// Default priority.
    Normal,
    /// Should be scheduled ahead of normal work.
    High,
    /// Needs attention this cycle.
    Urgent,
    /// Drop-everything priority.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only task record as supplied by the external data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority band.
    pub priority: TaskPriority,
    /// Scheduled start, if planned.
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled deadline, if planned.
    pub due_date: Option<DateTime<Utc>>,
    /// Actual completion timestamp, if completed.
    pub completed_date: Option<DateTime<Utc>>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Recorded effort in hours.
    pub actual_hours: f64,
    /// Assigned user, if any.
    pub assignee_id: Option<UserId>,
}

impl TaskSnapshot {
    /// Creates a task record with no schedule, effort, or assignee data.
    #[must_use]
    pub const fn new(
        id: TaskId,
        project_id: ProjectId,
        status: TaskStatus,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id,
            project_id,
            status,
            priority,
            start_date: None,
            due_date: None,
            completed_date: None,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            assignee_id: None,
        }
    }

    /// Sets the planned task window.
    #[must_use]
    pub const fn with_schedule(
        mut self,
        start_date: Option<DateTime<Utc>>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start_date;
        self.due_date = due_date;
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_date(mut self, completed_date: DateTime<Utc>) -> Self {
        self.completed_date = Some(completed_date);
        self
    }

    /// Sets estimated and recorded effort.
    #[must_use]
    pub const fn with_hours(mut self, estimated_hours: f64, actual_hours: f64) -> Self {
        self.estimated_hours = estimated_hours;
        self.actual_hours = actual_hours;
        self
    }

    /// Sets the assigned user.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Returns `true` when the task reached the completed status.
    ///
    /// Closed tasks are not counted as completed: closure without the
    /// completed transition means the work was never delivered.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Returns `true` when the task still consumes assignee capacity.
    ///
    /// Everything outside completed and cancelled counts as open,
    /// including closed tasks.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.status, TaskStatus::Completed | TaskStatus::Cancelled)
    }

    /// Returns `true` when the deadline has passed and the task is still
    /// open.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now) && self.is_open()
    }
}
