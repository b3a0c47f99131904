//! Remote Store Trait
//!
//! Seam between the caching facade and the shared remote key-value store.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

// == Remote Store ==
/// A shared remote key-value store, keyed by string, holding values of type `V`.
///
/// Implementations own storage, serialization, and connection management;
/// the facade never inspects or transforms values. Single-key operations are
/// assumed atomic at the store. Absence is always reported as `Ok(None)` or a
/// `false` refresh result, never as an error.
#[async_trait]
pub trait RemoteStore<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<V>, StoreError>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// With `Some(ttl)` the entry expires after `ttl`; with `None` it
    /// never expires. A write always replaces the previous expiry.
    async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<(), StoreError>;

    /// Resets the remaining lifetime of `key` to `ttl`.
    ///
    /// Returns `true` if a live entry was refreshed, `false` if the key
    /// was absent or already expired.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, StoreError>;

    /// Removes `key` from the store. Removing an absent key is a success.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
