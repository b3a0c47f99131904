//! Memory Store Module
//!
//! In-memory implementation of the remote store contract, combining HashMap
//! storage with TTL expiration. Intended as a single-process stand-in for a
//! shared store and as the collaborator used by the test suite.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{RemoteStore, StoreEntry, StoreStats};
use crate::error::StoreError;

// == Inner State ==
/// Entry map and counters guarded together: every read may lazily expire
/// entries, so both move under one lock.
#[derive(Debug)]
struct MemoryInner<V> {
    entries: HashMap<String, StoreEntry<V>>,
    stats: StoreStats,
}

// == Memory Store ==
/// In-memory key-value store with TTL support.
///
/// Expired entries are dropped lazily on access and can also be swept in bulk
/// with [`MemoryStore::cleanup_expired`]. There is no capacity bound and no
/// eviction other than expiry.
#[derive(Debug)]
pub struct MemoryStore<V> {
    inner: RwLock<MemoryInner<V>>,
}

impl<V> MemoryStore<V> {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                entries: HashMap::new(),
                stats: StoreStats::new(),
            }),
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let expired_keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            inner.entries.remove(&key);
            inner.stats.record_expiration();
        }

        let remaining = inner.entries.len();
        inner.stats.set_total_entries(remaining);
        count
    }

    // == Stats ==
    /// Returns current store statistics.
    pub async fn stats(&self) -> StoreStats {
        let guard = self.inner.read().await;
        let mut stats = guard.stats.clone();
        stats.set_total_entries(guard.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until
    /// they are swept.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Remote Store Implementation ==
#[async_trait]
impl<V> RemoteStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        // Write lock: a read may lazily remove an expired entry
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if let Some(entry) = inner.entries.get(key) {
            if entry.is_expired() {
                inner.entries.remove(key);
                let remaining = inner.entries.len();
                inner.stats.record_expiration();
                inner.stats.record_miss();
                inner.stats.set_total_entries(remaining);
                return Ok(None);
            }

            let value = entry.value.clone();
            inner.stats.record_hit();
            Ok(Some(value))
        } else {
            inner.stats.record_miss();
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard
            .entries
            .insert(key.to_string(), StoreEntry::new(value, ttl));
        let total = guard.entries.len();
        guard.stats.set_total_entries(total);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, StoreError> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        if let Some(entry) = inner.entries.get_mut(key) {
            if entry.is_expired() {
                inner.entries.remove(key);
                let remaining = inner.entries.len();
                inner.stats.record_expiration();
                inner.stats.set_total_entries(remaining);
                return Ok(false);
            }

            entry.refresh(ttl);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        if guard.entries.remove(key).is_some() {
            let total = guard.entries.len();
            guard.stats.set_total_entries(total);
        }
        Ok(())
    }
}
