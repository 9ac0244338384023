//! Process-local verification status cache.
//!
//! Advisory only: entries are refreshed from the authoritative store after
//! mutations and may be stale in between. The cache is an explicitly owned
//! object shared via `Arc` — never module-level state — and is written only
//! by [`VerificationWorkflow`](crate::VerificationWorkflow); readers must
//! re-fetch on demand rather than assuming freshness indefinitely.

use std::collections::HashMap;

use crewline_core::model::VerificationStatus;
use crewline_core::types::DbId;
use tokio::sync::RwLock;

/// Cached derived statuses keyed by (talent, skill group).
#[derive(Default)]
pub struct VerificationStatusCache {
    entries: RwLock<HashMap<(DbId, DbId), VerificationStatus>>,
}

impl VerificationStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached status for a pair, if any. May be stale.
    pub async fn get(&self, talent_id: DbId, skill_group_id: DbId) -> Option<VerificationStatus> {
        self.entries
            .read()
            .await
            .get(&(talent_id, skill_group_id))
            .cloned()
    }

    pub async fn insert(&self, status: VerificationStatus) {
        self.entries
            .write()
            .await
            .insert((status.talent_id, status.skill_group_id), status);
    }

    /// Drop a single pair's entry, forcing the next reader to miss.
    pub async fn invalidate_entry(&self, talent_id: DbId, skill_group_id: DbId) {
        self.entries
            .write()
            .await
            .remove(&(talent_id, skill_group_id));
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// All cached entries for one talent, keyed by skill group.
    pub async fn snapshot_for_talent(&self, talent_id: DbId) -> HashMap<DbId, VerificationStatus> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|((t, _), _)| *t == talent_id)
            .map(|((_, g), status)| (*g, status.clone()))
            .collect()
    }
}
