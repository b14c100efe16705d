//! In-memory implementation of the ResponseCache trait. A plain TTL map:
//! no capacity bound and no background sweeper, expired entries are dropped
//! by the lookup that finds them.
use crate::{CacheEntry, CacheError, ResponseCache, DEFAULT_TTL};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

pub struct InMemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl InMemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Cache with the stock one-hour TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> Result<usize, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Lock(e.to_string()))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}

#[async_trait]
impl ResponseCache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Lock(e.to_string()))?;

        match entries.get(key) {
            Some(entry) if entry.is_expired(Utc::now()) => {
                debug!("cache entry expired: {}", key);
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.clone())),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, payload: Vec<u8>) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Lock(e.to_string()))?;

        let entry = CacheEntry::new(key, payload, Utc::now(), self.ttl);
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Lock(e.to_string()))?;

        entries.clear();
        debug!("cache cleared");
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key).await?.is_some())
    }
}

impl std::fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock().unwrap();

        f.debug_struct("InMemoryCache")
            .field("entries", &entries.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
