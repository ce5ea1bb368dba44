//! Serper search client.
//!
//! # API Reference
//!
//! - Web search: `POST https://google.serper.dev/search`, body `{"q": ...}`
//! - Image search: `POST https://google.serper.dev/images`, body
//!   `{"q": ..., "gl": "us", "hl": "en", "autocorrect": true}`
//! - Auth: `X-API-KEY` header on both

use serde_json::json;
use tracing::debug;

use super::messages::{ImagesResponse, OrganicResponse, SearchHit};
use crate::errors::{AppError, AppResult};
use crate::utils::http::json_or_upstream_error;

/// Serper organic web-search endpoint.
pub const SEARCH_URL: &str = "https://google.serper.dev/search";

/// Serper image-search endpoint.
pub const IMAGES_URL: &str = "https://google.serper.dev/images";

/// Client for the Serper web and image search APIs.
pub struct SearchClient {
    search_url: String,
    images_url: String,
    api_key: String,
}

impl SearchClient {
    /// Create a client against the public Serper endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            images_url: IMAGES_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a client against alternate endpoints.
    pub fn with_urls(
        search_url: impl Into<String>,
        images_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            search_url: search_url.into(),
            images_url: images_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the web for a query, returning the first organic hit enriched
    /// with the first usable image.
    ///
    /// The organic and image calls run sequentially. Empty organic results
    /// fail with `AppError::NotFound`. No retries.
    pub async fn search_web(&self, query: &str) -> AppResult<SearchHit> {
        let client = reqwest::Client::new();

        let organic: OrganicResponse = json_or_upstream_error(
            client
                .post(&self.search_url)
                .header("X-API-KEY", &self.api_key)
                .json(&json!({"q": query}))
                .send()
                .await?,
        )
        .await?;

        let images: ImagesResponse = json_or_upstream_error(
            client
                .post(&self.images_url)
                .header("X-API-KEY", &self.api_key)
                .json(&json!({
                    "q": query,
                    "gl": "us",
                    "hl": "en",
                    "autocorrect": true,
                }))
                .send()
                .await?,
        )
        .await?;
        debug!(
            query,
            organic = organic.organic.len(),
            images = images.images.len(),
            "search results fetched"
        );

        let Some(first) = organic.organic.into_iter().next() else {
            return Err(AppError::NotFound(format!("no results found for {query}")));
        };

        Ok(SearchHit::from_upstream(first, &images.images))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_images(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/images"))
            .and(header("X-API-KEY", "test-search-key"))
            .and(body_partial_json(
                json!({"gl": "us", "hl": "en", "autocorrect": true}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn test_client(server: &MockServer) -> SearchClient {
        SearchClient::with_urls(
            format!("{}/search", server.uri()),
            format!("{}/images", server.uri()),
            "test-search-key",
        )
    }

    #[tokio::test]
    async fn first_organic_result_wins() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("X-API-KEY", "test-search-key"))
            .and(body_partial_json(json!({"q": "rust language"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [
                    {"title": "A", "snippet": "first", "link": "https://a.example.com"},
                    {"title": "B", "snippet": "second", "link": "https://b.example.com"}
                ]
            })))
            .mount(&server)
            .await;
        mock_images(&server, json!({"images": []})).await;

        let hit = test_client(&server).search_web("rust language").await.unwrap();
        assert_eq!(hit.title, "A");
        assert_eq!(hit.snippet, "first");
        assert_eq!(hit.source, "https://a.example.com");
        assert!(hit.image_url.is_none());
    }

    #[tokio::test]
    async fn image_pairing_skips_non_image_urls() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [{"title": "A", "snippet": "s", "link": "https://a.example.com"}]
            })))
            .mount(&server)
            .await;
        mock_images(
            &server,
            json!({
                "images": [
                    {"imageUrl": "https://example.com/article", "source": "example.com"},
                    {"imageUrl": "https://cdn.example.com/photo.png", "source": "cdn.example.com"}
                ]
            }),
        )
        .await;

        let hit = test_client(&server).search_web("anything").await.unwrap();
        assert_eq!(
            hit.image_url.as_deref(),
            Some("https://cdn.example.com/photo.png")
        );
        assert_eq!(hit.image_source.as_deref(), Some("cdn.example.com"));
    }

    #[tokio::test]
    async fn empty_organic_results_fail_with_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organic": []})))
            .expect(1)
            .mount(&server)
            .await;
        // the image call still happens before the emptiness check
        Mock::given(method("POST"))
            .and(path("/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": []})))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_web("xyzzyplugh")
            .await
            .unwrap_err();
        match err {
            AppError::NotFound(message) => {
                assert_eq!(message, "no results found for xyzzyplugh");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_error_is_surfaced_with_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "Unauthorized."})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server).search_web("anything").await.unwrap_err();
        match err {
            AppError::Upstream { status, .. } => assert_eq!(status.as_u16(), 403),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
