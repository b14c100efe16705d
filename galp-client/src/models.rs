//! Wire types for gallery listing responses.
//!
//! The API serializes some counters as JSON strings (`"page": "1"`) and
//! others as numbers (`"pages": 5`). The models normalize all of them to
//! `u32` on the way in; serialization back to the wire shape is not needed.
use serde::{Deserialize, Deserializer};

/// Top-level envelope of a gallery listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryResponse {
    pub photos: GalleryPage,
}

/// One decoded page of a gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryPage {
    #[serde(deserialize_with = "stringly_u32")]
    pub page: u32,
    pub pages: u32,
    #[serde(rename = "perpage", deserialize_with = "stringly_u32")]
    pub per_page: u32,
    pub total: u32,
    pub photo: Vec<Photo>,
}

/// A single photo record inside a gallery page.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: String,
}

impl Photo {
    /// Static-CDN URL of the photo derived from its record fields.
    pub fn photo_url(&self) -> String {
        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
            self.farm, self.server, self.id, self.secret
        )
    }
}

/// Accepts both `7` and `"7"` for a `u32` field.
fn stringly_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}
