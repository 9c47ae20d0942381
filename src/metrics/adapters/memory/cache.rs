//! In-memory TTL cache for computed reports.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::metrics::{
    domain::ProjectHealthReport,
    ports::{ReportCache, ReportCacheKey},
};

/// Thread-safe map-backed report cache with a fixed time-to-live.
///
/// Entries expire lazily: an expired entry reads as a miss, and stale
/// entries are swept on each store. A poisoned lock degrades the cache
/// to a permanent miss rather than failing the caller.
pub struct InMemoryReportCache<C>
where
    C: Clock + Send + Sync,
{
    ttl: Duration,
    clock: Arc<C>,
    state: Arc<RwLock<HashMap<ReportCacheKey, CacheEntry>>>,
}

struct CacheEntry {
    report: ProjectHealthReport,
    expires_at: DateTime<Utc>,
}

impl<C> InMemoryReportCache<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<C>) -> Self {
        Self {
            ttl,
            clock,
            state: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored entries, expired or not. Exposed for
    /// tests and capacity monitoring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map_or(0, |state| state.len())
    }

    /// Returns `true` when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C> ReportCache for InMemoryReportCache<C>
where
    C: Clock + Send + Sync,
{
    async fn get(&self, key: &ReportCacheKey) -> Option<ProjectHealthReport> {
        let state = self.state.read().ok()?;
        let entry = state.get(key)?;
        if entry.expires_at <= self.clock.utc() {
            return None;
        }
        Some(entry.report.clone())
    }

    async fn put(&self, key: ReportCacheKey, report: ProjectHealthReport) {
        let now = self.clock.utc();
        let Ok(mut state) = self.state.write() else {
            return;
        };
        state.retain(|_, entry| entry.expires_at > now);
        state.insert(
            key,
            CacheEntry {
                report,
                expires_at: now + self.ttl,
            },
        );
    }
}
