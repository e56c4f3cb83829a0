//! In-process query cache
//!
//! Keeps the last fetched value of each query together with a staleness
//! flag. Invalidating a key marks it stale; the value stays until the next
//! fetch replaces it.

use inorbit_application::QueryCache;
use inorbit_domain::QueryKey;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// A cached query result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    pub data: Option<Value>,
    pub stale: bool,
}

/// Thread-safe in-memory query cache
#[derive(Default)]
pub struct InMemoryQueryCache {
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store freshly fetched data for `key`
    pub fn set(&self, key: QueryKey, data: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                CacheEntry {
                    data: Some(data),
                    stale: false,
                },
            );
        }
    }

    pub fn get(&self, key: QueryKey) -> Option<CacheEntry> {
        self.entries.lock().ok()?.get(&key).cloned()
    }

    /// Whether `key` must be refetched before use
    pub fn is_stale(&self, key: QueryKey) -> bool {
        self.get(key).is_some_and(|entry| entry.stale)
    }

    /// Keys currently marked stale, sorted
    pub fn stale_keys(&self) -> Vec<QueryKey> {
        let Ok(entries) = self.entries.lock() else {
            return Vec::new();
        };
        let mut keys: Vec<QueryKey> = entries
            .iter()
            .filter(|(_, entry)| entry.stale)
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }
}

impl QueryCache for InMemoryQueryCache {
    fn invalidate(&self, key: QueryKey) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.entry(key).or_default().stale = true;
            debug!("Invalidated query {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalidate_marks_stale_and_keeps_data() {
        let cache = InMemoryQueryCache::new();
        cache.set(QueryKey::Summary, json!({"completed": 2}));
        assert!(!cache.is_stale(QueryKey::Summary));

        cache.invalidate(QueryKey::Summary);

        let entry = cache.get(QueryKey::Summary).unwrap();
        assert!(entry.stale);
        assert_eq!(entry.data, Some(json!({"completed": 2})));
    }

    #[test]
    fn test_invalidate_unknown_key_creates_marker() {
        let cache = InMemoryQueryCache::new();
        cache.invalidate(QueryKey::PendingGoals);

        assert!(cache.is_stale(QueryKey::PendingGoals));
        assert!(cache.get(QueryKey::PendingGoals).unwrap().data.is_none());
        assert_eq!(cache.stale_keys(), vec![QueryKey::PendingGoals]);
    }

    #[test]
    fn test_set_clears_staleness() {
        let cache = InMemoryQueryCache::new();
        cache.invalidate(QueryKey::PendingGoals);
        cache.set(QueryKey::PendingGoals, json!([]));
        assert!(cache.stale_keys().is_empty());
    }
}
