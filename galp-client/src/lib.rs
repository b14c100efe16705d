//! HTTP client for Flickr-style gallery APIs.
//!
//! The pieces compose one way: [`Endpoint`] builds URLs, [`ApiClient`]
//! fetches and decodes JSON through a [`galp_cache::ResponseCache`], and
//! [`models`] describe the gallery wire format. Failures are classified
//! into [`ApiError`]; no request is ever retried by this crate.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;

pub use client::{ApiClient, ApiClientParams};
pub use endpoint::{Endpoint, GalleryRequest, GalleryRequestBuilder};
pub use error::ApiError;
pub use models::{GalleryPage, GalleryResponse, Photo};

// Re-export
pub use reqwest;
pub use url;
