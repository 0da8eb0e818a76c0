//! # Snapshot Cache
//!
//! Request-cache layer keyed by (endpoint, parameters). Each key holds the
//! last successful response and when it arrived; the polling loop asks
//! [`SnapshotCache::needs_refresh`] before fetching, and a write invalidates
//! related keys (uploading a batch invalidates the batch list).
//!
//! There is no eviction and no TTL beyond the poll interval check: entries
//! are as fresh as the last poll and a failed poll leaves the previous
//! snapshot in place until the next tick succeeds.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Poll interval for batch and result views.
pub const RESULT_VIEW_POLL: Duration = Duration::from_secs(5);

/// Poll interval for dashboard-style views.
pub const DASHBOARD_POLL: Duration = Duration::from_secs(10);

/// Poll interval for the KPI view.
pub const KPI_POLL: Duration = Duration::from_secs(60);

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

/// Cache of the last successful response per query key.
///
/// Two views of the same batch with different filters use different keys
/// and therefore cache independently.
pub struct SnapshotCache<T> {
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T: Clone> SnapshotCache<T> {
    /// An empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Store a snapshot under its query key, stamping it now.
    pub fn insert(&self, key: impl Into<String>, value: T) {
        self.entries.write().insert(
            key.into(),
            Entry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    /// The cached snapshot for a key, if any.
    pub fn get(&self, key: &str) -> Option<T> {
        self.entries.read().get(key).map(|e| e.value.clone())
    }

    /// Whether the poll loop should fetch this key: true when the key is
    /// missing or its snapshot is at least one interval old.
    pub fn needs_refresh(&self, key: &str, interval: Duration) -> bool {
        match self.entries.read().get(key) {
            Some(entry) => entry.fetched_at.elapsed() >= interval,
            None => true,
        }
    }

    /// Drop one key. Returns whether it was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Drop every key starting with the given prefix. Used by writes whose
    /// effect spans many parameter combinations (an upload invalidates all
    /// batch list views).
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write();
        let stale: Vec<String> = entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        for key in &stale {
            entries.remove(key);
        }
        stale.len()
    }

    /// Number of cached snapshots.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T: Clone> Default for SnapshotCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_needs_refresh() {
        let cache: SnapshotCache<u32> = SnapshotCache::new();
        assert!(cache.needs_refresh("batch-list", RESULT_VIEW_POLL));
    }

    #[test]
    fn fresh_entry_does_not_need_refresh() {
        let cache = SnapshotCache::new();
        cache.insert("batch-list", 1u32);
        assert!(!cache.needs_refresh("batch-list", Duration::from_secs(60)));
    }

    #[test]
    fn zero_interval_always_refreshes() {
        let cache = SnapshotCache::new();
        cache.insert("batch-list", 1u32);
        assert!(cache.needs_refresh("batch-list", Duration::ZERO));
    }

    #[test]
    fn filter_combinations_cache_independently() {
        let cache = SnapshotCache::new();
        cache.insert("batch/3?status=PENDING", vec![1, 2]);
        cache.insert("batch/3?status=ALL", vec![1, 2, 3]);
        assert_eq!(cache.get("batch/3?status=PENDING"), Some(vec![1, 2]));
        assert_eq!(cache.get("batch/3?status=ALL"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn invalidate_drops_only_the_named_key() {
        let cache = SnapshotCache::new();
        cache.insert("batch-list", 1u32);
        cache.insert("batch/3", 2u32);
        assert!(cache.invalidate("batch-list"));
        assert!(cache.get("batch-list").is_none());
        assert_eq!(cache.get("batch/3"), Some(2));
        assert!(!cache.invalidate("batch-list"));
    }

    #[test]
    fn invalidate_prefix_sweeps_parameter_combinations() {
        let cache = SnapshotCache::new();
        cache.insert("batch/3?page=0", 1u32);
        cache.insert("batch/3?page=1", 2u32);
        cache.insert("batch/4?page=0", 3u32);
        assert_eq!(cache.invalidate_prefix("batch/3"), 2);
        assert!(cache.get("batch/3?page=0").is_none());
        assert_eq!(cache.get("batch/4?page=0"), Some(3));
    }

    #[test]
    fn insert_replaces_previous_snapshot() {
        let cache = SnapshotCache::new();
        cache.insert("batch-list", 1u32);
        cache.insert("batch-list", 2u32);
        assert_eq!(cache.get("batch-list"), Some(2));
        assert_eq!(cache.len(), 1);
    }
}
