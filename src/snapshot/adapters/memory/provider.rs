//! In-memory snapshot provider for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::snapshot::{
    domain::{ProjectData, ProjectId},
    ports::{SnapshotProvider, SnapshotProviderError, SnapshotProviderResult},
};

/// Thread-safe map-backed snapshot provider.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotProvider {
    state: Arc<RwLock<HashMap<ProjectId, ProjectData>>>,
}

impl InMemorySnapshotProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot aggregate, keyed by its project identifier.
    /// Replaces any existing aggregate for the same project.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotProviderError::Source`] when the backing store
    /// lock is poisoned.
    pub fn insert(&self, data: ProjectData) -> SnapshotProviderResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotProviderError::source(std::io::Error::other(err.to_string())))?;
        state.insert(data.project.id, data);
        Ok(())
    }

    /// Removes a stored aggregate, returning it when present.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotProviderError::Source`] when the backing store
    /// lock is poisoned.
    pub fn remove(&self, project_id: ProjectId) -> SnapshotProviderResult<Option<ProjectData>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotProviderError::source(std::io::Error::other(err.to_string())))?;
        Ok(state.remove(&project_id))
    }
}

#[async_trait]
impl SnapshotProvider for InMemorySnapshotProvider {
    async fn load(&self, project_id: ProjectId) -> SnapshotProviderResult<Option<ProjectData>> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotProviderError::source(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&project_id).cloned())
    }

    async fn list_project_ids(&self) -> SnapshotProviderResult<Vec<ProjectId>> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotProviderError::source(std::io::Error::other(err.to_string())))?;
        Ok(state.keys().copied().collect())
    }
}
