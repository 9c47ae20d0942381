//! Cache port for memoizing computed reports.
//!
//! The engine itself is cache-agnostic: callers that want memoization
//! supply an implementation of this port to the reporting service. Keys
//! bind a report to the exact input that produced it, so a changed
//! snapshot can never serve a stale report; time-based expiry policy
//! belongs entirely to the implementation.

use crate::metrics::domain::ProjectHealthReport;
use crate::snapshot::domain::{ProjectData, ProjectId};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// Cache key binding a project to a digest of its snapshot input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportCacheKey {
    /// Assessed project.
    pub project_id: ProjectId,
    /// Hex SHA-256 digest of the canonical JSON encoding of the
    /// snapshot aggregate.
    pub fingerprint: String,
}

impl ReportCacheKey {
    /// Derives the cache key for a snapshot aggregate.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the aggregate cannot be
    /// encoded for fingerprinting.
    pub fn for_data(data: &ProjectData) -> Result<Self, serde_json::Error> {
        let encoded = serde_json::to_vec(data)?;
        let digest = Sha256::digest(&encoded);
        let fingerprint = digest
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<String>();
        Ok(Self {
            project_id: data.project.id,
            fingerprint,
        })
    }
}

/// Report memoization contract.
///
/// Lookups and stores are best-effort: implementations signal an
/// unusable cache by missing, never by failing, so a degraded cache can
/// only cost recomputation.
#[async_trait]
pub trait ReportCache: Send + Sync {
    /// Returns the cached report for a key, when present and still
    /// valid under the implementation's expiry policy.
    async fn get(&self, key: &ReportCacheKey) -> Option<ProjectHealthReport>;

    /// Stores a report under a key.
    async fn put(&self, key: ReportCacheKey, report: ProjectHealthReport);
}
