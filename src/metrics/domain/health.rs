//! Composite health assessment: score, indicator tiers, risks, and
//! recommendations.

use super::{BudgetAnalyzer, BudgetReport, ProgressCalculator, TeamReport, TeamUtilizationAnalyzer};
use crate::snapshot::domain::{MilestoneSnapshot, ProjectData, ProjectSnapshot, TaskSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score deduction for a project past its due date.
const OVERDUE_PROJECT_PENALTY: u32 = 30;
/// Score deduction for budget utilization above 100 percent.
const BUDGET_OVERRUN_PENALTY: u32 = 25;
/// Score deduction for budget utilization above 90 percent.
const BUDGET_NEAR_LIMIT_PENALTY: u32 = 15;
/// Score deduction per overdue task, and its cap.
const OVERDUE_TASK_PENALTY_STEP: u32 = 2;
const OVERDUE_TASK_PENALTY_CAP: u32 = 20;
/// Score deduction per overdue milestone, and its cap.
const OVERDUE_MILESTONE_PENALTY_STEP: u32 = 5;
const OVERDUE_MILESTONE_PENALTY_CAP: u32 = 15;

/// Schedule-variance tier bounds, in percentage points behind plan.
const SCHEDULE_GOOD_VARIANCE: f64 = -5.0;
const SCHEDULE_WARNING_VARIANCE: f64 = -15.0;
/// Budget-utilization tier bounds, in whole percent.
const BUDGET_GOOD_UTILIZATION: u32 = 80;
const BUDGET_WARNING_UTILIZATION: u32 = 95;
/// Task-completion-rate tier bounds, in whole percent.
const SCOPE_GOOD_RATE: f64 = 70.0;
const SCOPE_WARNING_RATE: f64 = 50.0;
/// Team-utilization tier bounds, in whole percent.
const TEAM_GOOD_UTILIZATION: u8 = 80;
const TEAM_WARNING_UTILIZATION: u8 = 95;
/// Efficiency tier bounds, in whole percent.
const QUALITY_GOOD_EFFICIENCY: u32 = 80;
const QUALITY_WARNING_EFFICIENCY: u32 = 60;

/// Numeric score bounds below which the overall status degrades.
const CRITICAL_SCORE_FLOOR: u8 = 50;
const WARNING_SCORE_FLOOR: u8 = 80;

/// Budget utilization above which a budget risk is raised.
const BUDGET_RISK_UTILIZATION: u32 = 90;
/// Active member count below which a resourcing risk is raised.
const MIN_TEAM_SIZE: usize = 2;
/// Overdue task count above which a delivery risk is raised.
const OVERDUE_TASK_RISK_THRESHOLD: usize = 5;

/// Standing recommendation appended whenever the overall status is not
/// good.
const REVIEW_RECOMMENDATION: &str = "Schedule a project review meeting with stakeholders";

/// Composes progress, budget, and team figures into one health report.
#[derive(Debug, Clone, Copy)]
pub struct HealthScorer;

impl HealthScorer {
    /// Runs the full assessment over a snapshot aggregate at `now`:
    /// invokes the budget and team analyzers, then scores their output.
    #[must_use]
    pub fn assess(data: &ProjectData, now: DateTime<Utc>) -> HealthReport {
        let completion = ProgressCalculator::completion(&data.tasks);
        let budget = BudgetAnalyzer::analyze(&data.project, completion, now);
        let team = TeamUtilizationAnalyzer::analyze(&data.members, &data.tasks);
        Self::evaluate(&data.project, &data.tasks, &data.milestones, &budget, &team, now)
    }

    /// Scores precomputed analyzer reports against the project's tasks
    /// and milestones.
    ///
    /// [`Self::assess`] is the usual entry point; this seam exists for
    /// callers that already hold the analyzer output.
    #[must_use]
    pub fn evaluate(
        project: &ProjectSnapshot,
        tasks: &[TaskSnapshot],
        milestones: &[MilestoneSnapshot],
        budget: &BudgetReport,
        team: &TeamReport,
        now: DateTime<Utc>,
    ) -> HealthReport {
        let overdue_tasks = tasks.iter().filter(|task| task.is_overdue(now)).count();
        let overdue_milestones = milestones
            .iter()
            .filter(|milestone| milestone.is_overdue(now))
            .count();

        let score = Self::score(project, budget, overdue_tasks, overdue_milestones, now);
        let indicators = Self::indicators(project, tasks, budget, team, now);
        let overall_status = Self::overall_status(score, &indicators);
        let risks = Self::risks(project, budget, team, overdue_tasks, now);
        let recommendations = Self::recommendations(&risks, overall_status);

        HealthReport {
            overall_status,
            score,
            indicators,
            risks,
            recommendations,
        }
    }

    /// Applies the four independent deductions to a baseline of 100,
    /// flooring at 0.
    fn score(
        project: &ProjectSnapshot,
        budget: &BudgetReport,
        overdue_tasks: usize,
        overdue_milestones: usize,
        now: DateTime<Utc>,
    ) -> u8 {
        let mut deductions = 0_u32;

        if project.is_overdue(now) {
            deductions += OVERDUE_PROJECT_PENALTY;
        }

        if budget.budget_utilization > 100 {
            deductions += BUDGET_OVERRUN_PENALTY;
        } else if budget.budget_utilization > 90 {
            deductions += BUDGET_NEAR_LIMIT_PENALTY;
        }

        let task_count = u32::try_from(overdue_tasks).unwrap_or(u32::MAX);
        deductions += task_count
            .saturating_mul(OVERDUE_TASK_PENALTY_STEP)
            .min(OVERDUE_TASK_PENALTY_CAP);

        let milestone_count = u32::try_from(overdue_milestones).unwrap_or(u32::MAX);
        deductions += milestone_count
            .saturating_mul(OVERDUE_MILESTONE_PENALTY_STEP)
            .min(OVERDUE_MILESTONE_PENALTY_CAP);

        100_u32.saturating_sub(deductions) as u8
    }

    /// Computes the five indicator tiers, each from its own figure.
    fn indicators(
        project: &ProjectSnapshot,
        tasks: &[TaskSnapshot],
        budget: &BudgetReport,
        team: &TeamReport,
        now: DateTime<Utc>,
    ) -> IndicatorSet {
        let completion = ProgressCalculator::completion(tasks);
        let expected = ProgressCalculator::expected(project.start_date, project.due_date, now);
        let schedule_variance = f64::from(completion) - expected;

        // A project with no tasks has nothing left to deliver, so its
        // scope reads as fully complete rather than as zero progress.
        let completion_rate = if tasks.is_empty() {
            100.0
        } else {
            f64::from(completion)
        };

        IndicatorSet {
            schedule: Indicator {
                status: schedule_status(schedule_variance),
                value: schedule_variance,
            },
            budget: Indicator {
                status: budget_status(budget.budget_utilization),
                value: f64::from(budget.budget_utilization),
            },
            scope: Indicator {
                status: scope_status(completion_rate),
                value: completion_rate,
            },
            team: Indicator {
                status: team_status(team.utilization),
                value: f64::from(team.utilization),
            },
            quality: Indicator {
                status: quality_status(team.efficiency),
                value: f64::from(team.efficiency),
            },
        }
    }

    /// Derives the overall tier from the numeric score and the indicator
    /// tiers: critical below 50 or with any critical indicator, warning
    /// below 80 or with any warning indicator, good otherwise.
    fn overall_status(score: u8, indicators: &IndicatorSet) -> HealthStatus {
        let statuses = indicators.statuses();
        if score < CRITICAL_SCORE_FLOOR || statuses.contains(&HealthStatus::Critical) {
            HealthStatus::Critical
        } else if score < WARNING_SCORE_FLOOR || statuses.contains(&HealthStatus::Warning) {
            HealthStatus::Warning
        } else {
            HealthStatus::Good
        }
    }

    /// Assembles the risk list in severity-relevant order: schedule,
    /// budget, resourcing, delivery.
    fn risks(
        project: &ProjectSnapshot,
        budget: &BudgetReport,
        team: &TeamReport,
        overdue_tasks: usize,
        now: DateTime<Utc>,
    ) -> Vec<Risk> {
        let mut risks = Vec::new();

        if project.is_overdue(now) {
            let days_overdue = project
                .due_date
                .map_or(0, |due| (now - due).num_days().max(0));
            risks.push(Risk {
                kind: RiskKind::Schedule,
                severity: RiskSeverity::High,
                title: "Project Overdue".to_owned(),
                description: format!(
                    "The project due date passed {days_overdue} day(s) ago and delivery \
                     is not complete."
                ),
                mitigation: "Re-baseline the delivery plan and confirm a revised due date \
                             with the client"
                    .to_owned(),
            });
        }

        if budget.budget_utilization > BUDGET_RISK_UTILIZATION {
            let severity = if budget.budget_utilization > 100 {
                RiskSeverity::Critical
            } else {
                RiskSeverity::High
            };
            risks.push(Risk {
                kind: RiskKind::Budget,
                severity,
                title: "High Budget Utilization".to_owned(),
                description: format!(
                    "{}% of the approved budget has been consumed.",
                    budget.budget_utilization
                ),
                mitigation: "Freeze non-essential spend and review the cost baseline \
                             with stakeholders"
                    .to_owned(),
            });
        }

        if team.members.len() < MIN_TEAM_SIZE {
            risks.push(Risk {
                kind: RiskKind::Resourcing,
                severity: RiskSeverity::Medium,
                title: "Limited Resources".to_owned(),
                description: format!(
                    "Only {} active member(s) are assigned to the project.",
                    team.members.len()
                ),
                mitigation: "Assign additional team members to reduce delivery risk".to_owned(),
            });
        }

        if overdue_tasks > OVERDUE_TASK_RISK_THRESHOLD {
            risks.push(Risk {
                kind: RiskKind::Delivery,
                severity: RiskSeverity::High,
                title: "Multiple Overdue Tasks".to_owned(),
                description: format!("{overdue_tasks} tasks are past their due dates."),
                mitigation: "Triage overdue tasks and reassign or reschedule the critical ones".to_owned(),
            });
        }

        risks
    }

    /// Collects the mitigations of high and critical risks, deduplicated
    /// in first-seen order, and appends the standing review
    /// recommendation when the overall status is degraded.
    fn recommendations(risks: &[Risk], overall_status: HealthStatus) -> Vec<String> {
        let mut recommendations: Vec<String> = Vec::new();
        for risk in risks {
            if risk.severity == RiskSeverity::Medium {
                continue;
            }
            if !recommendations.contains(&risk.mitigation) {
                recommendations.push(risk.mitigation.clone());
            }
        }
        if overall_status != HealthStatus::Good {
            recommendations.push(REVIEW_RECOMMENDATION.to_owned());
        }
        recommendations
    }
}

const fn schedule_status(variance: f64) -> HealthStatus {
    if variance >= SCHEDULE_GOOD_VARIANCE {
        HealthStatus::Good
    } else if variance >= SCHEDULE_WARNING_VARIANCE {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

const fn budget_status(utilization: u32) -> HealthStatus {
    if utilization <= BUDGET_GOOD_UTILIZATION {
        HealthStatus::Good
    } else if utilization <= BUDGET_WARNING_UTILIZATION {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

const fn scope_status(completion_rate: f64) -> HealthStatus {
    if completion_rate >= SCOPE_GOOD_RATE {
        HealthStatus::Good
    } else if completion_rate >= SCOPE_WARNING_RATE {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

const fn team_status(utilization: u8) -> HealthStatus {
    if utilization <= TEAM_GOOD_UTILIZATION {
        HealthStatus::Good
    } else if utilization <= TEAM_WARNING_UTILIZATION {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

const fn quality_status(efficiency: u32) -> HealthStatus {
    if efficiency >= QUALITY_GOOD_EFFICIENCY {
        HealthStatus::Good
    } else if efficiency >= QUALITY_WARNING_EFFICIENCY {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

/// Health tier used for indicators and the overall status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Within tolerance.
    Good,
    /// Needs attention.
    Warning,
    /// Needs intervention.
    Critical,
}

impl HealthStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One indicator: its tier and the figure that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Tier for this dimension.
    pub status: HealthStatus,
    /// Underlying figure (variance, utilization, rate, or efficiency).
    pub value: f64,
}

/// The five health indicators, each computed independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    /// Actual-versus-expected completion variance.
    pub schedule: Indicator,
    /// Budget utilization.
    pub budget: Indicator,
    /// Task completion rate.
    pub scope: Indicator,
    /// Aggregate team utilization.
    pub team: Indicator,
    /// Estimated-over-actual effort efficiency.
    pub quality: Indicator,
}

impl IndicatorSet {
    /// Returns the five tiers in a fixed order.
    #[must_use]
    pub const fn statuses(&self) -> [HealthStatus; 5] {
        [
            self.schedule.status,
            self.budget.status,
            self.scope.status,
            self.team.status,
            self.quality.status,
        ]
    }
}

/// Risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Delivery deadline risk.
    Schedule,
    /// Cost risk.
    Budget,
    /// Staffing risk.
    Resourcing,
    /// Task execution risk.
    Delivery,
}

/// Risk severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    /// Worth tracking.
    Medium,
    /// Needs a mitigation plan.
    High,
    /// Needs immediate action.
    Critical,
}

/// One identified risk with its suggested mitigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Risk category.
    #[serde(rename = "type")]
    pub kind: RiskKind,
    /// Severity band.
    pub severity: RiskSeverity,
    /// Short risk title.
    pub title: String,
    /// What was observed.
    pub description: String,
    /// Suggested mitigation.
    pub mitigation: String,
}

/// Composite health assessment for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Overall tier derived from the score and indicator tiers.
    pub overall_status: HealthStatus,
    /// Composite score in [0, 100].
    pub score: u8,
    /// Per-dimension indicators.
    pub indicators: IndicatorSet,
    /// Identified risks, worst-category first.
    pub risks: Vec<Risk>,
    /// Mitigations for high and critical risks plus the standing review
    /// recommendation when degraded.
    pub recommendations: Vec<String>,
}
