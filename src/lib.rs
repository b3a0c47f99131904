//! Region Cache - a region-scoped caching facade over a shared key-value store
//!
//! Provides TTL expiry, refresh-on-access, and default-value substitution on
//! top of any store implementing [`RemoteStore`], with every key isolated
//! under a region prefix so independent consumers can share one store.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use region_cache::{CacheConfig, MemoryStore, RegionCache};
//!
//! #[tokio::main]
//! async fn main() -> region_cache::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!
//!     let sessions = RegionCache::new(
//!         Arc::clone(&store),
//!         CacheConfig::new("sessions")
//!             .with_expiry(Duration::from_secs(600))
//!             .with_refresh_on_access(),
//!     )?;
//!
//!     sessions.put("user:42", "alice".to_string()).await?;
//!
//!     if let Some(owner) = sessions.get("user:42").await? {
//!         println!("session owner: {}", owner);
//!     }
//!
//!     // Compute-and-store on miss
//!     let profile = sessions
//!         .get_or_compute("profile:42", |key| Some(format!("loaded {}", key)))
//!         .await?;
//!     assert!(profile.is_some());
//!
//!     sessions.invalidate("user:42").await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{MemoryStore, RegionCache, RemoteStore, StoreEntry, StoreStats, KEY_SEPARATOR};
pub use config::CacheConfig;
pub use error::{CacheError, Result, StoreError};
pub use tasks::spawn_cleanup_task;
