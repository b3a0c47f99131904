//! Store Entry Module
//!
//! Defines the structure for individual in-memory store entries with TTL
//! support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Store Entry ==
/// A single stored value with creation and expiry metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl<V> StoreEntry<V> {
    // == Constructor ==
    /// Creates a new entry, expiring after `ttl` if one is given.
    pub fn new(value: V, ttl: Option<Duration>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl.map(|ttl| now + ttl.as_millis() as u64);

        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired when the current time is greater than or equal to
    /// its expiration time; an entry without an expiration never expires.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Refresh ==
    /// Resets the remaining lifetime to `ttl` from now.
    pub fn refresh(&mut self, ttl: Duration) {
        self.expires_at = Some(current_timestamp_ms() + ttl.as_millis() as u64);
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// Returns `Some(0)` once the entry has expired.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at.map(|expires| {
            let now = current_timestamp_ms();
            expires.saturating_sub(now)
        })
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
