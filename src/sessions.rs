use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ResultRecord;

/// How often the expiry sweeper wakes up
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// A session's stored recommendation outcome
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResult {
    pub results: Vec<ResultRecord>,
    pub stored_at: DateTime<Utc>,
}

/// In-process per-session result storage.
///
/// One slot per session id: every successful prediction overwrites it and
/// every result query re-serves it. Entries live until the expiry sweeper
/// removes them.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredResult>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a new empty session store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores the latest results for a session, replacing any previous entry
    pub async fn store(&self, session: Uuid, results: Vec<ResultRecord>) {
        let mut inner = self.inner.write().await;
        inner.insert(
            session,
            StoredResult {
                results,
                stored_at: Utc::now(),
            },
        );
    }

    /// Returns a session's stored results, leaving the entry in place
    pub async fn results(&self, session: Uuid) -> Option<StoredResult> {
        let inner = self.inner.read().await;
        inner.get(&session).cloned()
    }

    /// Removes entries stored at least `ttl` ago, returning how many went
    pub async fn prune_older_than(&self, ttl: chrono::Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut inner = self.inner.write().await;
        let before = inner.len();
        inner.retain(|_, stored| stored.stored_at > cutoff);
        before - inner.len()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Spawns the background task that prunes expired sessions once a minute
pub fn spawn_expiry_sweeper(store: SessionStore, ttl: chrono::Duration) {
    tokio::spawn(async move {
        tracing::info!(ttl_secs = ttl.num_seconds(), "Session expiry sweeper started");
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            let removed = store.prune_older_than(ttl).await;
            if removed > 0 {
                tracing::debug!(removed, "Pruned expired sessions");
            }
        }
    });
}
