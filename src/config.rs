//! Configuration Module
//!
//! Construction-time configuration for a cache instance: region name,
//! TTL policy, refresh-on-access flag, and optional default value.

use std::time::Duration;

use crate::cache::KEY_SEPARATOR;

/// Configuration for a single cache instance.
///
/// A config is built once, validated at cache construction, and immutable
/// afterwards. All policy knobs have chainable setters with conservative
/// defaults: no expiry, no refresh-on-access, no default value.
#[derive(Debug, Clone)]
pub struct CacheConfig<V> {
    /// Logical namespace prepended to every key
    pub region: String,
    /// Time to live applied to stored entries when expiry is enabled
    pub ttl: Duration,
    /// Whether stored entries expire at all
    pub expiry_enabled: bool,
    /// Whether a successful read resets the remaining TTL
    pub refresh_on_access: bool,
    /// Value returned (never stored) when a key is absent
    pub default_value: Option<V>,
}

impl<V> CacheConfig<V> {
    /// Creates a config for the given region with expiry disabled,
    /// refresh-on-access off, and no default value.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ttl: Duration::ZERO,
            expiry_enabled: false,
            refresh_on_access: false,
            default_value: None,
        }
    }

    /// Enables expiry with the given TTL.
    pub fn with_expiry(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self.expiry_enabled = true;
        self
    }

    /// Resets the remaining TTL on every successful read.
    ///
    /// Has no effect unless expiry is enabled.
    pub fn with_refresh_on_access(mut self) -> Self {
        self.refresh_on_access = true;
        self
    }

    /// Sets the value substituted on read misses.
    ///
    /// The default value is only ever returned, never written to the store.
    pub fn with_default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None if valid.
    /// The region must be non-empty and must not contain the key separator,
    /// so that two distinct regions can never produce overlapping keys.
    pub fn validate(&self) -> Option<String> {
        if self.region.is_empty() {
            return Some("Region cannot be empty".to_string());
        }
        if self.region.contains(KEY_SEPARATOR) {
            return Some(format!(
                "Region cannot contain the '{}' separator",
                KEY_SEPARATOR
            ));
        }
        if self.expiry_enabled && self.ttl.is_zero() {
            return Some("TTL must be non-zero when expiry is enabled".to_string());
        }
        None
    }
}
