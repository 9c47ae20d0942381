//! Schedule progress calculations.

use crate::snapshot::domain::TaskSnapshot;
use chrono::{DateTime, Utc};

/// Derives actual and expected completion percentages for a project.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Returns the share of tasks that reached the completed status, as a
    /// whole percentage rounded half-up. An empty task set reports 0.
    #[must_use]
    pub fn completion(tasks: &[TaskSnapshot]) -> u8 {
        if tasks.is_empty() {
            return 0;
        }
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        let percentage = (completed as f64 / tasks.len() as f64) * 100.0;
        percentage.round() as u8
    }

    /// Returns the completion percentage the schedule calls for at `now`:
    /// elapsed whole days over the planned window, clamped to [0, 100].
    ///
    /// Degenerate windows (either bound missing, or the due date not
    /// after the start) report 0.
    #[must_use]
    pub fn expected(
        start_date: Option<DateTime<Utc>>,
        due_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> f64 {
        let (Some(window_start), Some(window_end)) = (start_date, due_date) else {
            return 0.0;
        };
        let total_days = (window_end - window_start).num_days();
        if total_days <= 0 {
            return 0.0;
        }
        let elapsed_days = (now - window_start).num_days().max(0);
        ((elapsed_days as f64 / total_days as f64) * 100.0).clamp(0.0, 100.0)
    }
}
