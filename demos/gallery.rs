//! Gallery browsing demo: loads a whole gallery page by page and prints
//! photo titles with their static URLs.
//!
//! Needs a real API key in `GALP_API_KEY`; `GALP_GALLERY_ID` overrides the
//! demo gallery.

use std::sync::Arc;

use galp::prelude::*;
use galp::{tracing, tracing_subscriber};

const DEMO_GALLERY_ID: &str = "66911286-72157647277042064";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key =
        std::env::var("GALP_API_KEY").expect("Set GALP_API_KEY env variable");
    let gallery_id = std::env::var("GALP_GALLERY_ID")
        .unwrap_or_else(|_| DEMO_GALLERY_ID.to_string());

    let cache = Arc::new(InMemoryCache::with_default_ttl());
    let client = ApiClient::new(ApiClientParams::default(), cache)?;
    let pager =
        GalleryPager::new(client, GalleryRequest::new(api_key, gallery_id));

    pager.photos.bind(|photos: &Vec<Photo>| {
        println!("-- {} photos accumulated --", photos.len());
    });
    pager.last_error.bind(|error: &Option<String>| {
        if let Some(message) = error {
            tracing::error!("gallery load failed: {}", message);
        }
    });

    let first = pager.load_page(1).await?;
    tracing::info!(
        "gallery has {} pages with {} photos",
        first.pages,
        first.total
    );

    loop {
        match pager.load_next_page_if_available().await? {
            NextPage::Loaded(page) => {
                tracing::info!("page {} of {} loaded", page.page, page.pages);
            }
            NextPage::AtLastPage => break,
        }
    }

    for photo in pager.photos.get() {
        println!("{}  {}", photo.title, photo.photo_url());
    }
    Ok(())
}
