use crate::{CacheEntry, CacheError};
use async_trait::async_trait;

/// Core response cache trait that backends must implement.
///
/// Keys are normalized URL strings. `get` and `contains` treat an expired
/// entry as absent; a backend may reclaim it during that lookup. There is
/// no per-key removal: entries leave the cache only through expiry,
/// overwrite, or `clear`.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Get a live (non-expired) entry from the cache.
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Store a payload under `key`, overwriting any existing entry. The
    /// entry expires a fixed TTL after the write.
    async fn put(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError>;

    /// Evict all entries unconditionally.
    async fn clear(&self) -> Result<(), CacheError>;

    /// Check whether a live entry exists for `key`.
    async fn contains(&self, key: &str) -> Result<bool, CacheError>;
}
