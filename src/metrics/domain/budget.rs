//! Budget burn and cost-performance calculations.

use crate::snapshot::domain::ProjectSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Share of the approved budget attributed to labor. A fixed proxy ratio
/// standing in for a real time-tracking integration.
const LABOR_COST_RATIO: f64 = 0.60;

/// Planned duration assumed when a schedule bound is missing.
const DEFAULT_PLANNED_DURATION_DAYS: i64 = 30;

/// Cost-performance index reported when no labor cost has accrued. A
/// sentinel that keeps the ratio defined, not a statement of performance.
const ZERO_LABOR_CPI: f64 = 1.0;

/// Currency assumed when the project record carries none.
const DEFAULT_CURRENCY: &str = "USD";

/// Derives cost, burn-rate, and variance figures from a project's budget
/// fields.
#[derive(Debug, Clone, Copy)]
pub struct BudgetAnalyzer;

impl BudgetAnalyzer {
    /// Computes the budget report for a project at `completion` percent
    /// delivered, observed at `now`.
    ///
    /// Every division is guarded: a missing or zero budget reports zero
    /// utilization and variance percentages, zero elapsed days reports a
    /// zero burn rate, and zero labor cost reports the CPI sentinel.
    #[must_use]
    pub fn analyze(project: &ProjectSnapshot, completion: u8, now: DateTime<Utc>) -> BudgetReport {
        let budget = project.budget.unwrap_or(0.0);
        let labor_cost = budget * LABOR_COST_RATIO;
        // No expense data feed exists; the field is a placeholder.
        let expenses_cost = 0.0;
        let total_cost = labor_cost + expenses_cost;
        let remaining_budget = budget - total_cost;
        let variance = budget - total_cost;

        let budget_utilization = if budget > 0.0 {
            ((total_cost / budget) * 100.0).round() as u32
        } else {
            0
        };
        let variance_percentage = if budget > 0.0 {
            ((variance / budget) * 100.0).round() as i32
        } else {
            0
        };

        let days_elapsed = project.elapsed_days(now);
        let burn_rate = if days_elapsed == 0 {
            0.0
        } else {
            round_to_cents(labor_cost / days_elapsed as f64)
        };

        let planned_days = project
            .planned_duration_days()
            .unwrap_or(DEFAULT_PLANNED_DURATION_DAYS);
        let projected_cost = round_to_cents(burn_rate * planned_days as f64);

        let cost_performance_index = if labor_cost > 0.0 {
            round_to_cents((f64::from(completion) / 100.0 * budget) / labor_cost)
        } else {
            ZERO_LABOR_CPI
        };

        let currency = project
            .budget_currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());

        BudgetReport {
            budget,
            actual_cost: project.actual_cost.unwrap_or(0.0),
            labor_cost,
            expenses_cost,
            total_cost,
            remaining_budget,
            budget_utilization,
            variance,
            variance_percentage,
            burn_rate,
            projected_cost,
            cost_performance_index,
            currency,
        }
    }
}

/// Rounds a monetary or ratio figure to two decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Budget figures derived for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    /// Approved budget amount; 0 when the project carries none.
    pub budget: f64,
    /// Recorded actual cost; 0 when the project tracks none.
    pub actual_cost: f64,
    /// Labor cost attributed via the fixed proxy ratio.
    pub labor_cost: f64,
    /// Expense cost. Always 0 until an expense data feed exists.
    pub expenses_cost: f64,
    /// Labor plus expenses.
    pub total_cost: f64,
    /// Budget left after total cost.
    pub remaining_budget: f64,
    /// Total cost as a whole percentage of budget; 0 without a budget.
    pub budget_utilization: u32,
    /// Budget minus total cost.
    pub variance: f64,
    /// Variance as a whole percentage of budget; 0 without a budget.
    pub variance_percentage: i32,
    /// Labor cost per elapsed day, to two decimals; 0 on day zero.
    pub burn_rate: f64,
    /// Burn rate extrapolated over the planned duration.
    pub projected_cost: f64,
    /// Earned value over labor cost, to two decimals; 1.0 when no labor
    /// cost has accrued.
    pub cost_performance_index: f64,
    /// Budget currency code.
    pub currency: String,
}
