//! Response cache for galp.
//!
//! Stores raw API response payloads keyed by URL, each entry carrying a
//! fixed time-to-live applied at write time. The crate offers a trait-based
//! API with pluggable backends.
//!
//! Currently supported backends:
//! - In-memory TTL map (no capacity bound, expired entries reclaimed lazily
//!   on lookup)

mod cache;
mod error;
mod memory;
mod response_cache;

pub use cache::{CacheEntry, DEFAULT_TTL};
pub use error::CacheError;
pub use memory::InMemoryCache;
pub use response_cache::ResponseCache;
