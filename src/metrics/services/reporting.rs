//! Service layer for generating project health reports.

use crate::metrics::{
    domain::ProjectHealthReport,
    ports::{ReportCache, ReportCacheKey},
};
use crate::snapshot::{
    domain::{ProjectData, ProjectId},
    ports::{SnapshotProvider, SnapshotProviderError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for report generation.
#[derive(Debug, Error)]
pub enum HealthReportError {
    /// The provider has no snapshot for the project.
    #[error("no snapshot available for project {0}")]
    UnknownProject(ProjectId),

    /// Snapshot loading failed.
    #[error(transparent)]
    Provider(#[from] SnapshotProviderError),

    /// The snapshot aggregate could not be fingerprinted for caching.
    #[error("failed to fingerprint snapshot: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

/// Result type for report generation operations.
pub type HealthReportResult<T> = Result<T, HealthReportError>;

/// Health report orchestration service.
///
/// Loads snapshot aggregates through the provider port, runs the pure
/// calculators against the injected clock's notion of now, and
/// optionally memoizes results through a [`ReportCache`].
#[derive(Clone)]
pub struct HealthReportService<P, C>
where
    P: SnapshotProvider,
    C: Clock + Send + Sync,
{
    provider: Arc<P>,
    clock: Arc<C>,
    cache: Option<Arc<dyn ReportCache>>,
}

impl<P, C> HealthReportService<P, C>
where
    P: SnapshotProvider,
    C: Clock + Send + Sync,
{
    /// Creates a service with no report cache.
    #[must_use]
    pub const fn new(provider: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            provider,
            clock,
            cache: None,
        }
    }

    /// Attaches a report cache. Cached reports are keyed by project and
    /// snapshot fingerprint, so changed input always recomputes.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn ReportCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Generates the health report for one project.
    ///
    /// # Errors
    ///
    /// Returns [`HealthReportError::UnknownProject`] when the provider
    /// has no snapshot for the project, or wraps provider and
    /// fingerprinting failures.
    pub async fn report(&self, project_id: ProjectId) -> HealthReportResult<ProjectHealthReport> {
        let data = self
            .provider
            .load(project_id)
            .await?
            .ok_or(HealthReportError::UnknownProject(project_id))?;
        self.cached_report(&data).await
    }

    /// Generates health reports for every project the provider lists.
    ///
    /// Projects that disappear between listing and loading are skipped;
    /// a portfolio sweep should not fail because one record was deleted
    /// mid-flight.
    ///
    /// # Errors
    ///
    /// Wraps provider and fingerprinting failures.
    pub async fn portfolio(&self) -> HealthReportResult<Vec<ProjectHealthReport>> {
        let project_ids = self.provider.list_project_ids().await?;
        let mut reports = Vec::with_capacity(project_ids.len());
        for project_id in project_ids {
            if let Some(data) = self.provider.load(project_id).await? {
                reports.push(self.cached_report(&data).await?);
            }
        }
        Ok(reports)
    }

    /// Scores a caller-supplied snapshot aggregate directly: no provider
    /// lookup, no cache, no failure modes.
    #[must_use]
    pub fn report_for(&self, data: &ProjectData) -> ProjectHealthReport {
        ProjectHealthReport::build(data, self.clock.utc())
    }

    async fn cached_report(&self, data: &ProjectData) -> HealthReportResult<ProjectHealthReport> {
        let Some(cache) = self.cache.as_ref() else {
            return Ok(self.report_for(data));
        };
        let key = ReportCacheKey::for_data(data)?;
        if let Some(cached) = cache.get(&key).await {
            return Ok(cached);
        }
        let report = self.report_for(data);
        cache.put(key, report.clone()).await;
        Ok(report)
    }
}
