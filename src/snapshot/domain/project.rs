//! Project-level snapshot record and lifecycle status.

use super::{ParseProjectStatusError, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is being scoped and has not started.
    Planning,
    /// Project is in delivery.
    Active,
    /// Delivery is temporarily paused.
    OnHold,
    /// All work has been delivered.
    Completed,
    /// Project was abandoned before delivery.
    Cancelled,
    /// Project has been closed out and archived.
    Archived,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Archived => "archived",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only project record as supplied by the external data layer.
///
/// The record carries schedule bounds and budget figures; collections
/// (tasks, milestones, members) travel alongside it in
/// [`super::ProjectData`]. Field invariants (non-negative budget, due date
/// at or after start date) are the supplier's responsibility; the engine
/// computes over whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    /// Project identifier.
    pub id: ProjectId,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Record creation timestamp, used as the elapsed-time origin when no
    /// start date is set.
    pub created_at: DateTime<Utc>,
    /// Scheduled start of delivery, if planned.
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled delivery deadline, if planned.
    pub due_date: Option<DateTime<Utc>>,
    /// Actual completion timestamp, if delivered.
    pub completed_at: Option<DateTime<Utc>>,
    /// Approved budget amount, if budgeted.
    pub budget: Option<f64>,
    /// ISO currency code for the budget.
    pub budget_currency: Option<String>,
    /// Recorded actual cost, if tracked.
    pub actual_cost: Option<f64>,
}

impl ProjectSnapshot {
    /// Creates a project record with no schedule or budget data.
    #[must_use]
    pub const fn new(id: ProjectId, status: ProjectStatus, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status,
            created_at,
            start_date: None,
            due_date: None,
            completed_at: None,
            budget: None,
            budget_currency: None,
            actual_cost: None,
        }
    }

    /// Sets the planned delivery window.
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

    /// Sets the approved budget and its currency.
    #[must_use]
    pub fn with_budget(mut self, budget: f64, currency: impl Into<String>) -> Self {
        self.budget = Some(budget);
        self.budget_currency = Some(currency.into());
        self
    }

    /// Sets the recorded actual cost.
    #[must_use]
    pub const fn with_actual_cost(mut self, actual_cost: f64) -> Self {
        self.actual_cost = Some(actual_cost);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Returns `true` when the due date has passed and delivery is not
    /// complete.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now) && self.status != ProjectStatus::Completed
    }

    /// Returns the planned delivery duration in whole days, when both
    /// schedule bounds are set.
    #[must_use]
    pub fn planned_duration_days(&self) -> Option<i64> {
        match (self.start_date, self.due_date) {
            (Some(start), Some(due)) => Some((due - start).num_days()),
            _ => None,
        }
    }

    /// Returns the whole days elapsed since the start date, falling back
    /// to the record creation timestamp when no start date is set. Never
    /// negative.
    #[must_use]
    pub fn elapsed_days(&self, now: DateTime<Utc>) -> i64 {
        let origin = self.start_date.unwrap_or(self.created_at);
        (now - origin).num_days().max(0)
    }
}
