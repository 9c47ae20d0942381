//! Shared world state for health reporting BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use pharos::metrics::{domain::ProjectHealthReport, services::HealthReportService};
use pharos::snapshot::{
    adapters::memory::InMemorySnapshotProvider,
    domain::{MemberSnapshot, MilestoneSnapshot, ProjectSnapshot, TaskSnapshot},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestReportService = HealthReportService<InMemorySnapshotProvider, DefaultClock>;

/// Scenario world for health reporting behaviour tests.
pub struct HealthWorld {
    pub provider: Arc<InMemorySnapshotProvider>,
    pub service: TestReportService,
    pub project: Option<ProjectSnapshot>,
    pub tasks: Vec<TaskSnapshot>,
    pub milestones: Vec<MilestoneSnapshot>,
    pub members: Vec<MemberSnapshot>,
    pub last_report: Option<ProjectHealthReport>,
}

impl HealthWorld {
    /// Creates a world with an empty provider and no pending scenario
    /// state.
    #[must_use]
    pub fn new() -> Self {
        let provider = Arc::new(InMemorySnapshotProvider::new());
        let service = HealthReportService::new(Arc::clone(&provider), Arc::new(DefaultClock));
        Self {
            provider,
            service,
            project: None,
            tasks: Vec::new(),
            milestones: Vec::new(),
            members: Vec::new(),
            last_report: None,
        }
    }

    /// Returns the generated report or fails the step.
    pub fn report(&self) -> Result<&ProjectHealthReport, eyre::Report> {
        self.last_report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no report has been generated in this scenario"))
    }
}

impl Default for HealthWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> HealthWorld {
    HealthWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
