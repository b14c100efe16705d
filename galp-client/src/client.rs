//! Cached JSON fetch client.
//!
//! [`ApiClient`] wraps a `reqwest::Client` and a pluggable response cache:
//! - cache probe before any network access; a live entry that decodes
//!   cleanly is served with zero HTTP activity
//! - single GET per cache miss, no automatic retries
//! - typed error classification (connectivity, timeout, status, body,
//!   decoding) via [`ApiError`]
//! - raw payload cached only after a successful decode, so a failed fetch
//!   never writes
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use galp_cache::InMemoryCache;
//! use galp_client::{ApiClient, ApiClientParams};
//!
//! let cache = Arc::new(InMemoryCache::with_default_ttl());
//! let client = ApiClient::new(ApiClientParams::default(), cache).unwrap();
//! ```
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use galp_cache::ResponseCache;

use crate::error::ApiError;

/// Request timeout applied to every call, in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;
/// Connection establishment timeout, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;
/// User agent reported on outbound requests.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Parameters for configuring the HTTP side of an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientParams<'a> {
    pub timeout: u64,
    pub connect_timeout: u64,
    pub user_agent: &'a str,
}

impl<'a> ApiClientParams<'a> {
    /// Creates an ApiClientParams instance from a YAML configuration chunk:
    /// ```yaml
    /// http:
    ///     timeout: 30
    ///     connect_timeout: 10
    /// ```
    ///
    /// # Panics
    /// Panics if required configuration fields are missing
    /// (timeout, connect_timeout)
    pub fn from_config(
        http_config: &serde_yaml::Value,
        user_agent: &'a str,
    ) -> Self {
        let timeout = http_config["timeout"]
            .as_u64()
            .expect("No timeout field in config");
        let connect_timeout = http_config["connect_timeout"]
            .as_u64()
            .expect("No connect_timeout field in config");

        Self {
            timeout,
            connect_timeout,
            user_agent,
        }
    }
}

impl Default for ApiClientParams<'_> {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT,
        }
    }
}

/// JSON fetcher with a read-through response cache.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    cache: Arc<dyn ResponseCache>,
}

impl ApiClient {
    pub fn new(
        params: ApiClientParams,
        cache: Arc<dyn ResponseCache>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::ClientBuilder::new()
            .use_rustls_tls()
            .timeout(Duration::from_secs(params.timeout))
            .connect_timeout(Duration::from_secs(params.connect_timeout))
            .user_agent(params.user_agent)
            .build()?;
        Ok(Self { http, cache })
    }

    /// Fetch `url` and decode the body as `T`, caching under the URL string.
    pub async fn fetch_json<T>(&self, url: &Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.fetch_json_keyed(url, url.as_str()).await
    }

    /// Fetch `url` with an explicit cache key.
    ///
    /// A live cached payload that still decodes as `T` short-circuits the
    /// call with no network access. A cached payload that no longer decodes
    /// falls through to a fresh fetch. The raw body is written back to the
    /// cache only after a successful decode; failures never write.
    pub async fn fetch_json_keyed<T>(
        &self,
        url: &Url,
        cache_key: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if let Some(entry) = self.cache.get(cache_key).await? {
            match serde_json::from_slice::<T>(&entry.payload) {
                Ok(decoded) => {
                    debug!("[{}] served from cache", cache_key);
                    return Ok(decoded);
                }
                Err(err) => {
                    warn!(
                        "[{}] cached payload no longer decodes ({}), refetching",
                        cache_key, err
                    );
                }
            }
        }

        info!("[{}] fetching", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::InvalidResponse
            }
        })?;
        if body.is_empty() {
            return Err(ApiError::NoData);
        }

        let decoded = serde_json::from_slice::<T>(&body)
            .map_err(|err| ApiError::DecodingFailed(err.to_string()))?;
        self.cache.put(cache_key, body.to_vec()).await?;
        Ok(decoded)
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &Arc<dyn ResponseCache> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galp_cache::InMemoryCache;

    const YAML_CONF_TEXT: &str = r#"
    http:
        timeout: 30
        connect_timeout: 10
    "#;

    const WRONG_YAML_CONF_TEXT: &str = r#"
    http:
        connect_timeout: 10
    "#;

    #[test]
    fn test_build_client() {
        let cache = Arc::new(InMemoryCache::with_default_ttl());
        let client = ApiClient::new(ApiClientParams::default(), cache);
        assert!(client.is_ok());
    }

    #[test]
    fn test_params_from_config() {
        let config: serde_yaml::Value =
            serde_yaml::from_str(YAML_CONF_TEXT).unwrap();
        let params =
            ApiClientParams::from_config(&config["http"], "gallerybot");

        assert_eq!(params.timeout, 30);
        assert_eq!(params.connect_timeout, 10);
        assert_eq!(params.user_agent, "gallerybot");
    }

    #[test]
    #[should_panic(expected = "No timeout field in config")]
    fn test_params_bad_config() {
        let config: serde_yaml::Value =
            serde_yaml::from_str(WRONG_YAML_CONF_TEXT).unwrap();
        let _ = ApiClientParams::from_config(&config["http"], "gallerybot");
    }

    #[test]
    fn test_default_params() {
        let params = ApiClientParams::default();
        assert_eq!(params.timeout, DEFAULT_TIMEOUT);
        assert_eq!(params.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(params.user_agent.starts_with("galp-client/"));
    }
}
