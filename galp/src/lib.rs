//! # GALP - Gallery API client with local page state
//!
//! `galp` fetches photo galleries page by page from a JSON REST API and keeps
//! the accumulated state local: decoded pages land in a time-bounded response
//! cache, photos pile up in a pager, and observers are notified through plain
//! observable cells. It is the library half of a gallery browser: everything
//! except the UI.
//!
//! ## Features
//!
//! - **Deterministic endpoints**: URL construction preserves query parameter
//!   order exactly; malformed hard-coded endpoints fail fast.
//! - **Time-bounded response cache**: raw payloads are cached with a TTL and
//!   served without any network access while still live.
//! - **Typed fetch errors**: connectivity, timeout, status, body and decoding
//!   failures are separate variants, never strings to parse.
//! - **Page accumulation**: photos from consecutive pages are appended in
//!   order, with a guard against overlapping loads.
//! - **Observable state**: photo snapshots and error messages are published
//!   through single-listener observable cells, synchronously.
//! - **YAML configuration**: the same dot-notation config handling for the
//!   HTTP layer and the gallery request parameters.
//!
//! ## Getting Started
//!
//! To use `galp` in your project, add it to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! galp = "0.1"
//! ```
//!
//! Check examples!
//!
//! ## Modules
//!
//! - `config`: YAML configuration loading with dot-notation access.
//! - `observable`: single-listener observable value cells.
//! - `pager`: gallery page loading and photo accumulation.
//! - `cache`: response cache types (re-export of `galp-cache`).
//! - `client`: endpoint, models and the fetch client (re-export of
//!   `galp-client`).
pub mod config;
pub mod observable;
pub mod pager;
pub mod prelude;
pub use galp_cache as cache;
pub use galp_client as client;
pub use galp_client::reqwest;
pub use galp_client::url;
// re-export
pub use serde;
pub use serde_json;
pub use serde_yaml;
pub use thiserror;
pub use tracing;
pub use tracing_subscriber;
