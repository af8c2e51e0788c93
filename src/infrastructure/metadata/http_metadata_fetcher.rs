//! HTTP metadata fetcher: downloads a page and extracts preview tags.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::json;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::debug;
use url::Url;

use crate::domain::entities::PageMetadata;
use crate::domain::repositories::MetadataFetcher;
use crate::error::AppError;

/// Browser-like User-Agent; many sites refuse obviously automated clients.
const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Transient fetch failures are retried this many times.
const FETCH_RETRIES: usize = 2;

static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("static selector")
});
static META_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="title"]"#).expect("static selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));
static OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("static selector")
});
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("static selector"));
static OG_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image"]"#).expect("static selector")
});
static OG_IMAGE_URL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image:url"]"#).expect("static selector")
});

/// [`MetadataFetcher`] backed by reqwest + scraper.
///
/// Used at link-creation time only. Network policy (timeout, retry with
/// backoff) lives here, never on the resolution path.
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
}

impl HttpMetadataFetcher {
    /// Builds a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(FETCH_USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to build HTTP client",
                    json!({ "reason": e.to_string() }),
                )
            })?;
        Ok(Self { client })
    }

    async fn download(&self, url: &Url) -> Result<String, AppError> {
        let strategy = ExponentialBackoff::from_millis(250).map(jitter).take(FETCH_RETRIES);

        let response = Retry::spawn(strategy, || async {
            self.client
                .get(url.clone())
                .header("Accept", "text/html,application/xhtml+xml,*/*;q=0.8")
                .send()
                .await
                .and_then(|r| r.error_for_status())
        })
        .await
        .map_err(|e| {
            AppError::internal(
                "Failed to fetch metadata",
                json!({ "url": url.as_str(), "reason": e.to_string() }),
            )
        })?;

        response.text().await.map_err(|e| {
            AppError::internal(
                "Failed to read page body",
                json!({ "url": url.as_str(), "reason": e.to_string() }),
            )
        })
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<PageMetadata, AppError> {
        let parsed = Url::parse(url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "url": url, "reason": e.to_string() }))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::bad_request(
                "URL must use http or https",
                json!({ "url": url, "scheme": parsed.scheme() }),
            ));
        }

        let body = self.download(&parsed).await?;
        let metadata = parse_preview_tags(&body, &parsed);
        debug!("Extracted metadata for {url}: {metadata:?}");
        Ok(metadata)
    }
}

/// Extracts preview metadata from an HTML document.
///
/// Open Graph tags take priority, then named meta tags, then the `<title>`
/// element. Relative image URLs are resolved against the page URL.
pub fn parse_preview_tags(body: &str, page_url: &Url) -> PageMetadata {
    let document = Html::parse_document(body);

    let title = meta_content(&document, &OG_TITLE)
        .or_else(|| meta_content(&document, &META_TITLE))
        .or_else(|| {
            document
                .select(&TITLE)
                .next()
                .map(|el| el.text().collect::<String>())
        })
        .unwrap_or_default();

    let description = meta_content(&document, &OG_DESCRIPTION)
        .or_else(|| meta_content(&document, &META_DESCRIPTION))
        .unwrap_or_default();

    let image = meta_content(&document, &OG_IMAGE)
        .or_else(|| meta_content(&document, &OG_IMAGE_URL))
        .unwrap_or_default();

    let image = absolutize(image.trim(), page_url);

    PageMetadata {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        image,
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
        .filter(|s| !s.trim().is_empty())
}

/// Resolves a possibly relative image URL against the page it came from.
fn absolutize(image: &str, page_url: &Url) -> String {
    if image.is_empty() || image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }
    page_url
        .join(image)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| image.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://news.example/articles/42").unwrap()
    }

    #[test]
    fn test_prefers_open_graph_tags() {
        let html = r#"<html><head>
            <title>Plain title</title>
            <meta name="description" content="Plain description">
            <meta property="og:title" content="OG title">
            <meta property="og:description" content="OG description">
            <meta property="og:image" content="https://cdn.example/a.jpg">
        </head><body></body></html>"#;

        let meta = parse_preview_tags(html, &page_url());
        assert_eq!(meta.title, "OG title");
        assert_eq!(meta.description, "OG description");
        assert_eq!(meta.image, "https://cdn.example/a.jpg");
    }

    #[test]
    fn test_falls_back_to_title_element_and_named_meta() {
        let html = r#"<html><head>
            <title> Fallback title </title>
            <meta name="description" content="Named description">
        </head><body></body></html>"#;

        let meta = parse_preview_tags(html, &page_url());
        assert_eq!(meta.title, "Fallback title");
        assert_eq!(meta.description, "Named description");
        assert_eq!(meta.image, "");
    }

    #[test]
    fn test_relative_image_is_absolutized() {
        let html = r#"<html><head>
            <meta property="og:image" content="/img/cover.png">
        </head></html>"#;

        let meta = parse_preview_tags(html, &page_url());
        assert_eq!(meta.image, "https://news.example/img/cover.png");
    }

    #[test]
    fn test_relative_image_without_leading_slash() {
        let html = r#"<html><head>
            <meta property="og:image" content="img/cover.png">
        </head></html>"#;

        let meta = parse_preview_tags(html, &page_url());
        assert_eq!(meta.image, "https://news.example/articles/img/cover.png");
    }

    #[test]
    fn test_empty_document_yields_empty_metadata() {
        let meta = parse_preview_tags("<html></html>", &page_url());
        assert_eq!(meta, PageMetadata::default());
    }

    #[test]
    fn test_og_image_url_variant() {
        let html = r#"<html><head>
            <meta property="og:image:url" content="https://cdn.example/b.jpg">
        </head></html>"#;

        let meta = parse_preview_tags(html, &page_url());
        assert_eq!(meta.image, "https://cdn.example/b.jpg");
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_http_scheme() {
        let fetcher = HttpMetadataFetcher::new(Duration::from_secs(1)).unwrap();
        let result = fetcher.fetch("ftp://example.com/file").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_unparsable_url() {
        let fetcher = HttpMetadataFetcher::new(Duration::from_secs(1)).unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
