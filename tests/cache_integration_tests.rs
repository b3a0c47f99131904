//! Integration Tests for the Caching Facade
//!
//! Exercises the full cache contract against the in-memory store, plus
//! failure propagation against an always-failing store double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use region_cache::{
    spawn_cleanup_task, CacheConfig, CacheError, MemoryStore, RegionCache, RemoteStore, StoreError,
};

// == Helper Functions ==

fn plain_cache(region: &str) -> RegionCache<String, MemoryStore<String>> {
    RegionCache::new(Arc::new(MemoryStore::new()), CacheConfig::new(region)).unwrap()
}

/// Store double whose every operation fails with a connection error.
struct FailingStore;

#[async_trait]
impl RemoteStore<String> for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Connection("store is down".to_string()))
    }

    async fn set(
        &self,
        _key: &str,
        _value: String,
        _ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        Err(StoreError::Connection("store is down".to_string()))
    }

    async fn expire(&self, _key: &str, _ttl: Duration) -> Result<bool, StoreError> {
        Err(StoreError::Connection("store is down".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Connection("store is down".to_string()))
    }
}

// == Contract Tests ==

#[tokio::test]
async fn test_put_get_roundtrip() {
    let cache = plain_cache("users");

    cache.put("42", "alice".to_string()).await.unwrap();

    assert_eq!(cache.get("42").await.unwrap().as_deref(), Some("alice"));
    assert_eq!(
        cache.get_if_present("42").await.unwrap().as_deref(),
        Some("alice")
    );
}

#[tokio::test]
async fn test_cloned_handle_shares_store_and_configuration() {
    let cache = plain_cache("users");
    assert_eq!(cache.region(), "users");

    let handle = cache.clone();
    handle.put("42", "alice".to_string()).await.unwrap();

    assert_eq!(
        cache.get_if_present("42").await.unwrap().as_deref(),
        Some("alice")
    );
    assert_eq!(handle.region(), "users");
}

#[tokio::test]
async fn test_parametric_value_type() {
    #[derive(Clone, Debug, PartialEq)]
    struct Session {
        user: String,
        logins: u32,
    }

    let cache = RegionCache::new(
        Arc::new(MemoryStore::<Session>::new()),
        CacheConfig::new("sessions"),
    )
    .unwrap();

    let session = Session {
        user: "alice".to_string(),
        logins: 3,
    };
    cache.put("42", session.clone()).await.unwrap();

    assert_eq!(cache.get_if_present("42").await.unwrap(), Some(session));
}

#[tokio::test]
async fn test_default_value_on_miss_only() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users").with_default_value("anonymous".to_string()),
    )
    .unwrap();

    // Miss: get substitutes, pure read does not
    assert_eq!(
        cache.get("missing").await.unwrap().as_deref(),
        Some("anonymous")
    );
    assert!(cache.get_if_present("missing").await.unwrap().is_none());

    // The default is never persisted
    assert!(cache.get_if_present("missing").await.unwrap().is_none());

    // Hit: the stored value wins
    cache.put("42", "alice".to_string()).await.unwrap();
    assert_eq!(cache.get("42").await.unwrap().as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_get_or_compute_invokes_closure_once_per_miss() {
    let cache = plain_cache("users");
    let calls = AtomicUsize::new(0);

    let value = cache
        .get_or_compute("42", |key| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(format!("user-{}", key))
        })
        .await
        .unwrap();

    assert_eq!(value.as_deref(), Some("user-42"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Second lookup hits the stored value; the closure stays cold
    let value = cache
        .get_or_compute("42", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some("recomputed".to_string())
        })
        .await
        .unwrap();

    assert_eq!(value.as_deref(), Some("user-42"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_get_or_compute_none_falls_back_to_default() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users").with_default_value("anonymous".to_string()),
    )
    .unwrap();

    let value = cache.get_or_compute("42", |_| None).await.unwrap();
    assert_eq!(value.as_deref(), Some("anonymous"));

    // No entry was written
    assert!(cache.get_if_present("42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalidate_then_pure_read_is_empty() {
    let cache = plain_cache("users");

    cache.put("42", "alice".to_string()).await.unwrap();
    cache.invalidate("42").await.unwrap();
    assert!(cache.get_if_present("42").await.unwrap().is_none());

    // Invalidating an already-absent key succeeds
    cache.invalidate("42").await.unwrap();
}

#[tokio::test]
async fn test_regions_share_store_without_collisions() {
    let store = Arc::new(MemoryStore::new());
    let users = RegionCache::new(Arc::clone(&store), CacheConfig::new("users")).unwrap();
    let orgs = RegionCache::new(Arc::clone(&store), CacheConfig::new("orgs")).unwrap();

    users.put("x", "v1".to_string()).await.unwrap();
    orgs.put("x", "v2".to_string()).await.unwrap();

    assert_eq!(users.get("x").await.unwrap().as_deref(), Some("v1"));
    assert_eq!(orgs.get("x").await.unwrap().as_deref(), Some("v2"));

    users.invalidate("x").await.unwrap();
    assert!(users.get_if_present("x").await.unwrap().is_none());
    assert_eq!(
        orgs.get_if_present("x").await.unwrap().as_deref(),
        Some("v2")
    );
}

// == TTL Tests ==

#[tokio::test]
async fn test_entries_expire_after_ttl() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users").with_expiry(Duration::from_secs(1)),
    )
    .unwrap();

    cache.put("42", "alice".to_string()).await.unwrap();
    assert!(cache.get_if_present("42").await.unwrap().is_some());

    sleep(Duration::from_millis(1100)).await;

    assert!(cache.get_if_present("42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_no_expiry_when_disabled() {
    let cache = plain_cache("users");

    cache.put("42", "alice".to_string()).await.unwrap();
    sleep(Duration::from_millis(1100)).await;

    assert!(cache.get_if_present("42").await.unwrap().is_some());
}

#[tokio::test]
async fn test_refresh_on_access_extends_lifetime() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users")
            .with_expiry(Duration::from_secs(1))
            .with_refresh_on_access(),
    )
    .unwrap();

    cache.put("42", "alice".to_string()).await.unwrap();

    // Each read lands well inside the TTL window and resets it; the entry
    // outlives its original one-second lifetime.
    for _ in 0..4 {
        sleep(Duration::from_millis(500)).await;
        assert!(
            cache.get_if_present("42").await.unwrap().is_some(),
            "Entry should stay alive while it keeps being read"
        );
    }

    // Once reads stop, the entry expires normally
    sleep(Duration::from_millis(1300)).await;
    assert!(cache.get_if_present("42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_reads_do_not_extend_lifetime_without_refresh_flag() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users").with_expiry(Duration::from_secs(1)),
    )
    .unwrap();

    cache.put("42", "alice".to_string()).await.unwrap();

    sleep(Duration::from_millis(500)).await;
    assert!(cache.get_if_present("42").await.unwrap().is_some());

    sleep(Duration::from_millis(700)).await;
    assert!(
        cache.get_if_present("42").await.unwrap().is_none(),
        "A read without refresh-on-access must not extend the TTL"
    );
}

#[tokio::test]
async fn test_computed_values_expire_like_puts() {
    let cache = RegionCache::new(
        Arc::new(MemoryStore::new()),
        CacheConfig::new("users").with_expiry(Duration::from_secs(1)),
    )
    .unwrap();

    cache
        .get_or_compute("42", |_| Some("alice".to_string()))
        .await
        .unwrap();
    assert!(cache.get_if_present("42").await.unwrap().is_some());

    sleep(Duration::from_millis(1100)).await;

    assert!(cache.get_if_present("42").await.unwrap().is_none());
}

// == Invalid Input Tests ==

#[tokio::test]
async fn test_empty_key_is_rejected() {
    let cache = plain_cache("users");

    assert!(matches!(
        cache.get("").await,
        Err(CacheError::InvalidArgument(_))
    ));
    assert!(matches!(
        cache.put("", "v".to_string()).await,
        Err(CacheError::InvalidArgument(_))
    ));
    assert!(matches!(
        cache.invalidate("").await,
        Err(CacheError::InvalidArgument(_))
    ));
}

// == Failure Propagation Tests ==

#[tokio::test]
async fn test_store_failures_propagate_unchanged() {
    let cache = RegionCache::new(Arc::new(FailingStore), CacheConfig::new("users")).unwrap();

    assert!(matches!(
        cache.get_if_present("42").await,
        Err(CacheError::Store(StoreError::Connection(_)))
    ));
    assert!(matches!(
        cache.get("42").await,
        Err(CacheError::Store(StoreError::Connection(_)))
    ));
    assert!(matches!(
        cache.get_or_compute("42", |_| Some("v".to_string())).await,
        Err(CacheError::Store(StoreError::Connection(_)))
    ));
    assert!(matches!(
        cache.put("42", "v".to_string()).await,
        Err(CacheError::Store(StoreError::Connection(_)))
    ));
    assert!(matches!(
        cache.invalidate("42").await,
        Err(CacheError::Store(StoreError::Connection(_)))
    ));
}

// == Cleanup Task Tests ==

#[tokio::test]
async fn test_cleanup_task_sweeps_facade_writes() {
    let store = Arc::new(MemoryStore::new());
    let cache = RegionCache::new(
        Arc::clone(&store),
        CacheConfig::new("users").with_expiry(Duration::from_secs(1)),
    )
    .unwrap();

    cache.put("42", "alice".to_string()).await.unwrap();
    assert_eq!(store.len().await, 1);

    let handle = spawn_cleanup_task(Arc::clone(&store), 1);

    sleep(Duration::from_millis(2500)).await;

    assert_eq!(store.len().await, 0, "Expired entry should have been swept");

    handle.abort();
}
