//! Application services for metrics orchestration.

mod reporting;

pub use reporting::{HealthReportError, HealthReportResult, HealthReportService};
