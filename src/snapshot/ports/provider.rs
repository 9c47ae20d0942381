//! Provider port for loading assembled project snapshots.

use crate::snapshot::domain::{ProjectData, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot provider operations.
pub type SnapshotProviderResult<T> = Result<T, SnapshotProviderError>;

/// Contract for the external data layer that assembles project snapshots.
///
/// Implementations own all querying, filtering, and access-control
/// concerns; the engine only ever sees the finished aggregate.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Loads the full snapshot aggregate for a project.
    ///
    /// Returns `None` when the project is unknown to the data source.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotProviderError::Source`] when the underlying data
    /// source fails.
    async fn load(&self, project_id: ProjectId) -> SnapshotProviderResult<Option<ProjectData>>;

    /// Lists the identifiers of every project the data source can
    /// assemble a snapshot for.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotProviderError::Source`] when the underlying data
    /// source fails.
    async fn list_project_ids(&self) -> SnapshotProviderResult<Vec<ProjectId>>;
}

/// Errors returned by snapshot provider implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotProviderError {
    /// Data-source failure.
    #[error("snapshot source error: {0}")]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotProviderError {
    /// Wraps a data-source error.
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Arc::new(err))
    }
}
