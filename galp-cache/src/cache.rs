use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// A cached raw response payload.
///
/// Entries are created when a fetch succeeds and overwritten on re-fetch of
/// the same key. They are never deleted individually; reclamation happens
/// lazily when a lookup finds an expired entry, or wholesale via `clear`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Normalized URL string the payload was fetched from.
    pub key: String,
    /// Raw response bytes, exactly as received.
    pub payload: Vec<u8>,
    /// When the payload was fetched.
    pub fetched_at: DateTime<Utc>,
    /// When the entry stops being served.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(
        key: &str,
        payload: Vec<u8>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        // TTLs come from configuration; an out-of-range value is a setup
        // error, not something to recover from at every lookup.
        let ttl = ChronoDuration::from_std(ttl)
            .expect("cache TTL out of range for chrono::Duration");
        Self {
            key: key.to_string(),
            payload,
            fetched_at: now,
            expires_at: now + ttl,
        }
    }

    /// An entry is expired from `fetched_at + ttl` onward; the deadline
    /// itself is no longer servable.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
