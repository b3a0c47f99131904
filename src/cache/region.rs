//! Region Cache Module
//!
//! The caching facade: translates logical cache operations into remote-store
//! operations under a fixed region prefix, TTL policy, and default-value
//! substitution.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{RemoteStore, KEY_SEPARATOR};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Region Cache ==
/// Region-scoped view of a shared remote key-value store.
///
/// Every key is prefixed with the region name, so any number of caches with
/// distinct regions can share one store without colliding. The cache holds no
/// entry state of its own, only immutable configuration; a single instance can
/// be shared freely across tasks, and across processes pointing at the same
/// store and region. The store may expire or evict entries independently, so
/// no entry is ever assumed present after a prior write.
pub struct RegionCache<V, S> {
    /// Shared remote store collaborator
    store: Arc<S>,
    /// Logical namespace prepended to every key
    region: String,
    /// Time to live applied on writes and refreshes when expiry is enabled
    ttl: Duration,
    /// Whether stored entries expire at all
    expiry_enabled: bool,
    /// Whether a successful read resets the remaining TTL
    refresh_on_access: bool,
    /// Value substituted on read misses, never stored
    default_value: Option<V>,
}

impl<V, S> RegionCache<V, S>
where
    V: Clone + Send + Sync + 'static,
    S: RemoteStore<V>,
{
    // == Constructor ==
    /// Creates a cache over `store` from a validated configuration.
    ///
    /// Fails with [`CacheError::InvalidArgument`] if the region is empty,
    /// contains the key separator, or expiry is enabled with a zero TTL.
    pub fn new(store: Arc<S>, config: CacheConfig<V>) -> Result<Self> {
        if let Some(message) = config.validate() {
            return Err(CacheError::InvalidArgument(message));
        }
        Ok(Self {
            store,
            region: config.region,
            ttl: config.ttl,
            expiry_enabled: config.expiry_enabled,
            refresh_on_access: config.refresh_on_access,
            default_value: config.default_value,
        })
    }

    /// Returns the region this cache operates in.
    pub fn region(&self) -> &str {
        &self.region
    }

    // == Get If Present ==
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// The default value is never substituted here; this is the pure read.
    /// When expiry and refresh-on-access are both enabled, the entry's
    /// remaining TTL is reset before the read.
    pub async fn get_if_present(&self, key: &str) -> Result<Option<V>> {
        let actual_key = self.actual_key(key)?;
        self.refresh_expiry(&actual_key).await?;
        let value = self.store.get(&actual_key).await?;
        if value.is_some() {
            debug!(region = %self.region, key, "cache hit");
        } else {
            debug!(region = %self.region, key, "cache miss");
        }
        Ok(value)
    }

    // == Get ==
    /// Returns the value stored under `key`, falling back to the configured
    /// default value on a miss.
    ///
    /// Returns `None` only when the key is absent and no default value is
    /// configured.
    pub async fn get(&self, key: &str) -> Result<Option<V>> {
        let value = self.get_if_present(key).await?;
        Ok(value.or_else(|| self.default_value.clone()))
    }

    // == Get Or Compute ==
    /// Read-through lookup: on a miss, `compute` is invoked with the caller
    /// key to produce a value.
    ///
    /// A `Some` result is written to the store (with TTL when expiry is
    /// enabled, without otherwise) and returned. A `None` result writes
    /// nothing and falls back to the configured default value.
    ///
    /// The read-compute-write sequence is not atomic: concurrent callers may
    /// each invoke `compute` for the same missing key and each write, with the
    /// last write winning in the store. Callers needing single-computation
    /// guarantees must supply an idempotent `compute` or coordinate
    /// externally.
    pub async fn get_or_compute<F>(&self, key: &str, compute: F) -> Result<Option<V>>
    where
        F: FnOnce(&str) -> Option<V> + Send,
    {
        let actual_key = self.actual_key(key)?;
        self.refresh_expiry(&actual_key).await?;

        if let Some(value) = self.store.get(&actual_key).await? {
            debug!(region = %self.region, key, "cache hit");
            return Ok(Some(value));
        }

        match compute(key) {
            Some(value) => {
                self.store
                    .set(&actual_key, value.clone(), self.write_ttl())
                    .await?;
                debug!(region = %self.region, key, "cache miss, computed and stored");
                Ok(Some(value))
            }
            None => {
                debug!(region = %self.region, key, "cache miss, compute returned nothing");
                Ok(self.default_value.clone())
            }
        }
    }

    // == Put ==
    /// Unconditionally stores `value` under `key`, honoring the TTL policy.
    pub async fn put(&self, key: &str, value: V) -> Result<()> {
        let actual_key = self.actual_key(key)?;
        self.store.set(&actual_key, value, self.write_ttl()).await?;
        debug!(region = %self.region, key, "cache put");
        Ok(())
    }

    // == Invalidate ==
    /// Removes `key` from the store. Succeeds if the key was already absent.
    pub async fn invalidate(&self, key: &str) -> Result<()> {
        let actual_key = self.actual_key(key)?;
        self.store.delete(&actual_key).await?;
        debug!(region = %self.region, key, "cache invalidate");
        Ok(())
    }

    // == Invalidate All ==
    /// No operation at this layer.
    ///
    /// The store exposes no scoped primitive for deleting every key under a
    /// prefix without a scan, so region-wide eviction is left to a
    /// store-side administrative operation.
    pub fn invalidate_all(&self) {
        debug!(region = %self.region, "invalidate_all is a no-op at this layer");
    }

    // == Key Generation ==
    /// Builds the physical store key: `region` + separator + `key`.
    ///
    /// The same function backs every operation, so writes and subsequent
    /// reads always agree on the physical key. Rejects empty keys before
    /// any remote call.
    fn actual_key(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "Key cannot be empty".to_string(),
            ));
        }
        Ok(format!("{}{}{}", self.region, KEY_SEPARATOR, key))
    }

    /// Resets the entry's remaining TTL when refresh-on-access applies.
    async fn refresh_expiry(&self, actual_key: &str) -> Result<()> {
        if self.expiry_enabled && self.refresh_on_access {
            self.store.expire(actual_key, self.ttl).await?;
        }
        Ok(())
    }

    /// TTL attached to writes: the configured duration when expiry is
    /// enabled, no expiry otherwise.
    fn write_ttl(&self) -> Option<Duration> {
        self.expiry_enabled.then_some(self.ttl)
    }
}

impl<V: Clone, S> Clone for RegionCache<V, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            region: self.region.clone(),
            ttl: self.ttl,
            expiry_enabled: self.expiry_enabled,
            refresh_on_access: self.refresh_on_access,
            default_value: self.default_value.clone(),
        }
    }
}
