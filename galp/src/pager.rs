//! Gallery page loading and photo accumulation.
//!
//! [`GalleryPager`] drives a paginated gallery through an [`ApiClient`]:
//! each loaded page appends its photos to the accumulated list, in order,
//! and the whole snapshot is republished through the `photos` observable.
//! Only one page load may be in flight at a time; an overlapping call is
//! rejected with [`PagerError::LoadInProgress`] instead of racing.
//!
//! Re-fetching a page that was already accumulated appends its photos
//! again. The pager keeps no per-page bookkeeping, so deduplication is the
//! caller's business.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use galp_client::endpoint::{GALLERY_HOST, GALLERY_PATH};
use galp_client::{
    ApiClient, ApiError, Endpoint, GalleryPage, GalleryRequest,
    GalleryResponse, Photo,
};

use crate::observable::Observable;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("A page load is already in flight")]
    LoadInProgress,
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Outcome of [`GalleryPager::load_next_page_if_available`].
#[derive(Debug, Clone)]
pub enum NextPage {
    Loaded(GalleryPage),
    AtLastPage,
}

#[derive(Debug)]
struct PagerState {
    current_page: u32,
    total_pages: Option<u32>,
    photos: Vec<Photo>,
}

impl PagerState {
    fn fresh() -> Self {
        Self {
            current_page: 1,
            total_pages: None,
            photos: Vec::new(),
        }
    }
}

/// Accumulates a gallery page by page.
pub struct GalleryPager {
    client: ApiClient,
    request: GalleryRequest,
    base: Endpoint,
    state: Mutex<PagerState>,
    loading: AtomicBool,
    /// Snapshot of all accumulated photos, republished after every
    /// successful page load.
    pub photos: Observable<Vec<Photo>>,
    /// Message of the most recent failed load; `None` until a load fails.
    pub last_error: Observable<Option<String>>,
}

impl GalleryPager {
    /// Pager against the production gallery host.
    pub fn new(client: ApiClient, request: GalleryRequest) -> Self {
        Self::with_base(
            client,
            request,
            Endpoint::new(GALLERY_HOST, GALLERY_PATH),
        )
    }

    /// Pager against an arbitrary base endpoint (scheme/host/path).
    pub fn with_base(
        client: ApiClient,
        request: GalleryRequest,
        base: Endpoint,
    ) -> Self {
        Self {
            client,
            request,
            base,
            state: Mutex::new(PagerState::fresh()),
            loading: AtomicBool::new(false),
            photos: Observable::new(Vec::new()),
            last_error: Observable::new(None),
        }
    }

    /// Fetch one page and append its photos to the accumulated list.
    ///
    /// On success the page counters are taken from the decoded response and
    /// the full photo snapshot is published through `photos`. On failure
    /// the error message is published through `last_error` and nothing is
    /// appended. Rejects the call when another load is still in flight.
    pub async fn load_page(&self, page: u32) -> Result<GalleryPage, PagerError> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("[page {}] load rejected, another load is in flight", page);
            return Err(PagerError::LoadInProgress);
        }
        let result = self.fetch_and_accumulate(page).await;
        self.loading.store(false, Ordering::Release);
        result
    }

    /// Load the page after the current one, unless the gallery end was
    /// reached. With no page loaded yet the total is unknown and this is a
    /// no-op; start with [`GalleryPager::load_page`].
    pub async fn load_next_page_if_available(
        &self,
    ) -> Result<NextPage, PagerError> {
        let next = {
            let state =
                self.state.lock().unwrap_or_else(PoisonError::into_inner);
            match state.total_pages {
                Some(total) if state.current_page < total => {
                    state.current_page + 1
                }
                _ => return Ok(NextPage::AtLastPage),
            }
        };
        let page = self.load_page(next).await?;
        Ok(NextPage::Loaded(page))
    }

    /// Drop all accumulated photos and counters, publish the empty
    /// snapshot and clear the last error. Cached responses are untouched,
    /// so reloading a recently seen page stays network-free.
    pub fn reset(&self) {
        {
            let mut state =
                self.state.lock().unwrap_or_else(PoisonError::into_inner);
            *state = PagerState::fresh();
        }
        self.photos.set(Vec::new());
        self.last_error.set(None);
    }

    pub fn current_page(&self) -> u32 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    async fn fetch_and_accumulate(
        &self,
        page: u32,
    ) -> Result<GalleryPage, PagerError> {
        let url = self.request.for_page(page).endpoint_at(&self.base).url();
        debug!("[page {}] loading gallery page", page);

        match self.client.fetch_json::<GalleryResponse>(&url).await {
            Ok(response) => {
                let loaded = response.photos;
                let snapshot = {
                    let mut state = self
                        .state
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    state.current_page = loaded.page;
                    state.total_pages = Some(loaded.pages);
                    state.photos.extend(loaded.photo.iter().cloned());
                    state.photos.clone()
                };
                info!(
                    "[page {}] loaded {} photos, {} accumulated",
                    page,
                    loaded.photo.len(),
                    snapshot.len()
                );
                self.photos.set(snapshot);
                Ok(loaded)
            }
            Err(err) => {
                error!("[page {}] gallery page load failed: {}", page, err);
                self.last_error.set(Some(err.to_string()));
                Err(PagerError::Api(err))
            }
        }
    }
}
