//! Merged per-project report assembled from all calculators.

use super::{
    BudgetAnalyzer, BudgetReport, HealthReport, HealthScorer, ProgressCalculator, TeamReport,
    TeamUtilizationAnalyzer,
};
use crate::snapshot::domain::{ProjectData, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actual-versus-expected completion figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Share of tasks completed, whole percent.
    pub completion: u8,
    /// Completion the schedule calls for, percent.
    pub expected_completion: f64,
    /// Completion minus expected completion; negative when behind plan.
    pub schedule_variance: f64,
}

/// The full metrics output for one project at one observation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHealthReport {
    /// Assessed project.
    pub project_id: ProjectId,
    /// Observation timestamp the figures were computed against.
    pub generated_at: DateTime<Utc>,
    /// Schedule progress figures.
    pub progress: ProgressReport,
    /// Budget figures.
    pub budget: BudgetReport,
    /// Team workload figures.
    pub team: TeamReport,
    /// Composite health assessment.
    pub health: HealthReport,
}

impl ProjectHealthReport {
    /// Runs every calculator over a snapshot aggregate observed at `now`
    /// and merges the results.
    ///
    /// Pure and total: identical inputs produce the identical report.
    #[must_use]
    pub fn build(data: &ProjectData, now: DateTime<Utc>) -> Self {
        let completion = ProgressCalculator::completion(&data.tasks);
        let expected_completion =
            ProgressCalculator::expected(data.project.start_date, data.project.due_date, now);
        let budget = BudgetAnalyzer::analyze(&data.project, completion, now);
        let team = TeamUtilizationAnalyzer::analyze(&data.members, &data.tasks);
        let health = HealthScorer::evaluate(
            &data.project,
            &data.tasks,
            &data.milestones,
            &budget,
            &team,
            now,
        );

        Self {
            project_id: data.project.id,
            generated_at: now,
            progress: ProgressReport {
                completion,
                expected_completion,
                schedule_variance: f64::from(completion) - expected_completion,
            },
            budget,
            team,
            health,
        }
    }
}
