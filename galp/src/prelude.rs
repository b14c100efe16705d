//! Flat re-exports of everything needed to drive a gallery session.
pub use crate::config::{ConfigError, Configurable};
pub use crate::observable::Observable;
pub use crate::pager::{GalleryPager, NextPage, PagerError};
pub use galp_cache::{
    CacheEntry, CacheError, InMemoryCache, ResponseCache, DEFAULT_TTL,
};
pub use galp_client::{
    ApiClient, ApiClientParams, ApiError, Endpoint, GalleryPage,
    GalleryRequest, GalleryRequestBuilder, GalleryResponse, Photo,
};
