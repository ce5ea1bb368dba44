//! Message types for the Serper search API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Upstream response types
// =============================================================================

/// Organic web-search response.
#[derive(Debug, Deserialize)]
pub(crate) struct OrganicResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// A single organic (non-sponsored) hit.
#[derive(Debug, Deserialize)]
pub(crate) struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// Image-search response.
#[derive(Debug, Deserialize)]
pub(crate) struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<ImageResult>,
}

/// A single image hit.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageResult {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub source: Option<String>,
}

/// Extensions accepted as direct image links.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Pick the first image whose URL either ends in a known image extension or
/// contains the substring "images" (case-insensitive). Hosting services often
/// return page URLs here; this filter keeps only links a browser can render
/// directly.
pub(crate) fn first_usable_image(images: &[ImageResult]) -> Option<&ImageResult> {
    images.iter().find(|image| {
        image.image_url.as_deref().is_some_and(|url| {
            IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
                || url.to_lowercase().contains("images")
        })
    })
}

// =============================================================================
// Gateway response type
// =============================================================================

/// Web-search result returned to the client: the single best organic hit,
/// optionally paired with an image. All other results are discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub source: String,
    pub image_url: Option<String>,
    pub image_source: Option<String>,
}

impl SearchHit {
    /// Pair the first organic hit with the first usable image.
    pub(crate) fn from_upstream(first: OrganicResult, images: &[ImageResult]) -> Self {
        let image = first_usable_image(images);
        Self {
            title: first.title,
            snippet: first.snippet,
            source: first.link,
            image_url: image.and_then(|i| i.image_url.clone()),
            image_source: image.and_then(|i| i.source.clone()),
        }
    }
}
