//! Team workload and efficiency calculations.

use crate::snapshot::domain::{MemberSnapshot, TaskSnapshot, UserId};
use serde::{Deserialize, Serialize};

/// Percentage points of utilization each open task contributes. A fixed
/// proxy weight, not a capacity model.
const OPEN_TASK_WEIGHT: u32 = 20;

/// Per-member utilization ceiling.
const UTILIZATION_CAP: u32 = 100;

/// Efficiency reported when completed tasks carry no estimated or no
/// recorded hours.
const DEFAULT_EFFICIENCY: u32 = 100;

/// Derives per-member and aggregate workload from active assignments.
#[derive(Debug, Clone, Copy)]
pub struct TeamUtilizationAnalyzer;

impl TeamUtilizationAnalyzer {
    /// Computes the team report from a project's memberships and tasks.
    ///
    /// Inactive memberships are skipped, so the full roster may be
    /// passed. Each active member's utilization is their open-task count
    /// weighted at [`OPEN_TASK_WEIGHT`] points per task and capped at
    /// 100; the aggregate is the rounded mean over active members, 0 when
    /// there are none.
    #[must_use]
    pub fn analyze(members: &[MemberSnapshot], tasks: &[TaskSnapshot]) -> TeamReport {
        let member_loads: Vec<MemberUtilization> = members
            .iter()
            .filter(|member| member.is_active)
            .map(|member| Self::member_load(member.user_id, tasks))
            .collect();

        let utilization = if member_loads.is_empty() {
            0
        } else {
            let total: f64 = member_loads
                .iter()
                .map(|load| f64::from(load.utilization))
                .sum();
            (total / member_loads.len() as f64).round() as u8
        };

        TeamReport {
            members: member_loads,
            utilization,
            efficiency: efficiency(tasks),
        }
    }

    fn member_load(user_id: UserId, tasks: &[TaskSnapshot]) -> MemberUtilization {
        let assigned_open_tasks = tasks
            .iter()
            .filter(|task| task.is_open() && task.assignee_id == Some(user_id))
            .count();
        let open_count = u32::try_from(assigned_open_tasks).unwrap_or(u32::MAX);
        let utilization = open_count
            .saturating_mul(OPEN_TASK_WEIGHT)
            .min(UTILIZATION_CAP) as u8;

        MemberUtilization {
            user_id,
            assigned_open_tasks: open_count,
            utilization,
        }
    }
}

/// Estimated-over-actual hours across completed tasks, as a whole
/// percentage. Reports [`DEFAULT_EFFICIENCY`] when either sum is zero.
fn efficiency(tasks: &[TaskSnapshot]) -> u32 {
    let mut estimated = 0.0;
    let mut actual = 0.0;
    for task in tasks.iter().filter(|task| task.is_completed()) {
        estimated += task.estimated_hours;
        actual += task.actual_hours;
    }
    if estimated <= 0.0 || actual <= 0.0 {
        return DEFAULT_EFFICIENCY;
    }
    ((estimated / actual) * 100.0).round() as u32
}

/// Workload figures for one active member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUtilization {
    /// Member user identifier.
    pub user_id: UserId,
    /// Open tasks currently assigned to the member.
    pub assigned_open_tasks: u32,
    /// Weighted workload percentage in [0, 100].
    pub utilization: u8,
}

/// Workload and efficiency figures for one project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    /// Per-member workloads, active members only.
    pub members: Vec<MemberUtilization>,
    /// Rounded mean of per-member utilization; 0 with no active members.
    pub utilization: u8,
    /// Estimated-over-actual hours percentage across completed tasks.
    pub efficiency: u32,
}
