//! Shared fixtures and builders for metrics tests.

use crate::snapshot::domain::{
    MemberSnapshot, MilestoneId, MilestoneSnapshot, ProjectId, ProjectSnapshot, ProjectStatus,
    TaskId, TaskPriority, TaskSnapshot, TaskStatus, UserId,
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::RwLock;

/// Fixed observation time shared across metrics tests.
pub fn observed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Active project created `created_days_ago` days before the shared
/// observation time, with no schedule or budget.
pub fn active_project(created_days_ago: i64) -> ProjectSnapshot {
    ProjectSnapshot::new(
        ProjectId::new(),
        ProjectStatus::Active,
        observed_at() - Duration::days(created_days_ago),
    )
}

/// Unassigned task in the given status.
pub fn task_with_status(project_id: ProjectId, status: TaskStatus) -> TaskSnapshot {
    TaskSnapshot::new(TaskId::new(), project_id, status, TaskPriority::Normal)
}

/// Open task already past its due date at the shared observation time.
pub fn overdue_task(project_id: ProjectId) -> TaskSnapshot {
    task_with_status(project_id, TaskStatus::InProgress)
        .with_schedule(None, Some(observed_at() - Duration::days(2)))
}

/// Pending milestone already past its due date at the shared observation
/// time.
pub fn overdue_milestone(project_id: ProjectId) -> MilestoneSnapshot {
    MilestoneSnapshot::new(MilestoneId::new(), project_id)
        .with_due_date(observed_at() - Duration::days(2))
}

/// Active membership for a fresh user.
pub fn active_member(project_id: ProjectId) -> MemberSnapshot {
    MemberSnapshot::new(UserId::new(), project_id)
}

/// Manually-advanced clock for cache and service tests.
pub struct StepClock {
    now: RwLock<DateTime<Utc>>,
}

impl StepClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.write().expect("clock lock should not poison");
        *now = *now + delta;
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock should not poison")
    }
}
