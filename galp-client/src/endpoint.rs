//! URL construction for gallery API calls.
//!
//! An [`Endpoint`] is a pure value: scheme, host, path and an ordered list
//! of query parameters. Building the URL is deterministic and preserves the
//! parameter order exactly as given, with no sorting and no deduplication.
//! A malformed endpoint is a programmer error, not a runtime condition, so
//! [`Endpoint::url`] panics instead of returning a `Result`.
use derive_builder::Builder;
use url::Url;

/// Production host of the gallery REST API.
pub const GALLERY_HOST: &str = "api.flickr.com";
/// REST entry point path on the gallery host.
pub const GALLERY_PATH: &str = "services/rest/";
/// API method that lists the photos of a gallery.
pub const GALLERY_METHOD: &str = "flickr.galleries.getPhotos";
/// Photos per page when the caller does not say otherwise.
pub const DEFAULT_PER_PAGE: u32 = 3;

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    /// New `https` endpoint with an empty query.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: "https".to_string(),
            host: host.into(),
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Override the scheme. Production traffic is always `https`; tests
    /// point endpoints at plain-`http` local servers.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Append a single query parameter, keeping insertion order.
    pub fn query(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a batch of query parameters, keeping their order.
    pub fn queries(
        mut self,
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Build the URL as `{scheme}://{host}/{path}?{query}`.
    ///
    /// # Panics
    /// Panics when host or path is empty, or when the components do not
    /// form a valid URL. This only happens with hard-coded bad values, so
    /// it is not recoverable by callers.
    pub fn url(&self) -> Url {
        assert!(!self.host.is_empty(), "endpoint host must not be empty");
        assert!(!self.path.is_empty(), "endpoint path must not be empty");

        let base = format!("{}://{}/{}", self.scheme, self.host, self.path);
        let mut url = Url::parse(&base).unwrap_or_else(|err| {
            panic!("invalid endpoint URL components {:?}: {}", self, err)
        });
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        url
    }
}

/// Query parameter set for one gallery-listing call.
///
/// Defaults mirror the public gallery API: JSON format without a JSONP
/// wrapper, three photos per page, first page. Only the API key and the
/// gallery id have no default.
#[derive(Builder, Debug, Clone)]
#[builder(public, setter(into))]
pub struct GalleryRequest {
    #[builder(default = "GALLERY_METHOD.to_string()")]
    pub method: String,
    pub api_key: String,
    pub gallery_id: String,
    #[builder(default = "\"json\".to_string()")]
    pub format: String,
    #[builder(default = "\"1\".to_string()")]
    pub no_json_callback: String,
    #[builder(default = "DEFAULT_PER_PAGE")]
    pub per_page: u32,
    #[builder(default = "1")]
    pub page: u32,
}

impl GalleryRequest {
    pub fn new(api_key: impl Into<String>, gallery_id: impl Into<String>) -> Self {
        Self {
            method: GALLERY_METHOD.to_string(),
            api_key: api_key.into(),
            gallery_id: gallery_id.into(),
            format: "json".to_string(),
            no_json_callback: "1".to_string(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }

    /// Creates a GalleryRequest from a YAML configuration chunk like:
    /// ```yaml
    /// gallery:
    ///     api_key: 0123456789abcdef
    ///     gallery_id: 66911286-72157647277042064
    ///     per_page: 3
    /// ```
    ///
    /// # Panics
    /// Panics if required configuration fields are missing
    /// (api_key, gallery_id)
    pub fn from_config(gallery_config: &serde_yaml::Value) -> Self {
        let api_key = gallery_config["api_key"]
            .as_str()
            .expect("No api_key field in config");
        let gallery_id = gallery_config["gallery_id"]
            .as_str()
            .expect("No gallery_id field in config");
        let mut request = Self::new(api_key, gallery_id);
        if let Some(per_page) = gallery_config["per_page"].as_u64() {
            request.per_page = per_page as u32;
        }
        request
    }

    /// Same request pointed at another page.
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Query parameters in the wire order the API documents.
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("method".to_string(), self.method.clone()),
            ("api_key".to_string(), self.api_key.clone()),
            ("gallery_id".to_string(), self.gallery_id.clone()),
            ("format".to_string(), self.format.clone()),
            ("nojsoncallback".to_string(), self.no_json_callback.clone()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }

    /// Endpoint on the production gallery host.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint_at(&Endpoint::new(GALLERY_HOST, GALLERY_PATH))
    }

    /// Endpoint with this request's query on an arbitrary base
    /// (scheme/host/path); any query on the base is replaced.
    pub fn endpoint_at(&self, base: &Endpoint) -> Endpoint {
        Endpoint {
            query: self.query_params(),
            ..base.clone()
        }
    }
}
