//! Presentation renderer: preview and interactive redirect documents.
//!
//! Both documents are pure functions of (record, classification, origin);
//! the service holds only static configuration, so identical inputs always
//! produce identical markup.

use askama::Template;

use crate::domain::classifier::Requester;
use crate::domain::entities::LinkRecord;
use crate::error::AppError;

/// Fallback heading when a record carries no title.
const DEFAULT_TITLE: &str = "Link preview";

/// Static preview document served to crawlers.
///
/// Exposes Open Graph and Twitter Card metadata plus a plain anchor to the
/// destination. Carries no refresh directive and no script: preview fetchers
/// do not execute script and must see complete metadata in the body.
#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate<'a> {
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    has_image: bool,
    canonical_url: String,
    destination_url: &'a str,
    fb_app_id: Option<&'a str>,
}

/// Interactive document served to clients.
///
/// Declares a 2-second passive refresh to the destination as a guaranteed
/// fallback, shows the preview card, and runs a staged redirect script:
/// 300 ms in, the platform-specific app handler is invoked (intent URL on
/// Android, custom scheme on iOS); 1500 ms later iOS falls back to the web
/// destination if the page is still visible; at 3000 ms from load an
/// unconditional visibility-checked redirect fires regardless of platform.
/// A manual anchor remains for agents that block the script.
#[derive(Template)]
#[template(path = "redirect.html")]
struct RedirectTemplate<'a> {
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    has_image: bool,
    destination_url: &'a str,
    destination_js: String,
    deep_link_js: String,
    intent_js: String,
}

/// Renders one of the two mutually exclusive response documents.
pub struct RenderService {
    deep_link_scheme: String,
    android_package: String,
    fb_app_id: Option<String>,
}

impl RenderService {
    pub fn new(
        deep_link_scheme: String,
        android_package: String,
        fb_app_id: Option<String>,
    ) -> Self {
        Self {
            deep_link_scheme,
            android_package,
            fb_app_id,
        }
    }

    /// Produces the response document for a resolved link.
    ///
    /// `origin` is the public base URL of this service, used for the
    /// canonical `og:url`.
    pub fn render(
        &self,
        link: &LinkRecord,
        requester: Requester,
        origin: &str,
    ) -> Result<String, AppError> {
        match requester {
            Requester::Crawler => self.render_preview(link, origin),
            Requester::Client => self.render_interactive(link),
        }
    }

    fn render_preview(&self, link: &LinkRecord, origin: &str) -> Result<String, AppError> {
        let template = PreviewTemplate {
            title: display_title(link),
            description: &link.description,
            image_url: &link.image_url,
            has_image: link.has_image(),
            canonical_url: format!("{}/s/{}", origin.trim_end_matches('/'), link.code),
            destination_url: &link.destination_url,
            fb_app_id: self.fb_app_id.as_deref(),
        };
        Ok(template.render()?)
    }

    fn render_interactive(&self, link: &LinkRecord) -> Result<String, AppError> {
        let template = RedirectTemplate {
            title: display_title(link),
            description: &link.description,
            image_url: &link.image_url,
            has_image: link.has_image(),
            destination_url: &link.destination_url,
            destination_js: js_string_literal(&link.destination_url),
            deep_link_js: js_string_literal(&self.deep_link(&link.destination_url)),
            intent_js: js_string_literal(&self.intent_url(&link.destination_url)),
        };
        Ok(template.render()?)
    }

    /// Custom-scheme deep link for iOS.
    fn deep_link(&self, destination_url: &str) -> String {
        format!(
            "{}://open?url={}",
            self.deep_link_scheme,
            urlencoding::encode(destination_url)
        )
    }

    /// Android intent URL with an embedded web fallback.
    fn intent_url(&self, destination_url: &str) -> String {
        let encoded = urlencoding::encode(destination_url);
        format!(
            "intent://open?url={}#Intent;scheme={};package={};S.browser_fallback_url={};end",
            encoded, self.deep_link_scheme, self.android_package, encoded
        )
    }
}

fn display_title(link: &LinkRecord) -> &str {
    if link.title.is_empty() {
        DEFAULT_TITLE
    } else {
        &link.title
    }
}

/// Encodes a string as a JavaScript string literal safe to embed in a
/// `<script>` element. JSON encoding handles quotes and control characters;
/// `<` is additionally escaped so a value containing `</script>` cannot
/// terminate the element.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewLink;

    fn service() -> RenderService {
        RenderService::new("shopapp".to_string(), "com.example.shop".to_string(), None)
    }

    fn link(title: &str, description: &str, image: &str, dest: &str) -> LinkRecord {
        LinkRecord::create(
            "abc123".to_string(),
            NewLink {
                title: title.to_string(),
                description: description.to_string(),
                image_url: image.to_string(),
                destination_url: dest.to_string(),
                ..Default::default()
            },
        )
    }

    const ORIGIN: &str = "https://go.example";

    #[test]
    fn test_preview_exposes_metadata_without_redirects() {
        let record = link(
            "Shoes",
            "Fresh kicks",
            "https://cdn.example/shoes.jpg",
            "https://shop.example/p/1",
        );
        let html = service()
            .render(&record, Requester::Crawler, ORIGIN)
            .unwrap();

        assert!(html.contains(r#"<meta property="og:title" content="Shoes">"#));
        assert!(html.contains(r#"<meta property="og:description" content="Fresh kicks">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://cdn.example/shoes.jpg">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://go.example/s/abc123">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(r#"href="https://shop.example/p/1""#));

        assert!(!html.contains("<script"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_preview_includes_fb_app_id_only_when_configured() {
        let record = link("T", "D", "", "https://example.com");

        let without = service()
            .render(&record, Requester::Crawler, ORIGIN)
            .unwrap();
        assert!(!without.contains("fb:app_id"));

        let with_id = RenderService::new(
            "shopapp".to_string(),
            "com.example.shop".to_string(),
            Some("1234567890".to_string()),
        )
        .render(&record, Requester::Crawler, ORIGIN)
        .unwrap();
        assert!(with_id.contains(r#"<meta property="fb:app_id" content="1234567890">"#));
    }

    #[test]
    fn test_interactive_contains_all_redirect_stages() {
        let record = link("Shoes", "Fresh kicks", "", "https://shop.example/p/1");
        let html = service()
            .render(&record, Requester::Client, ORIGIN)
            .unwrap();

        // Passive refresh fallback.
        assert!(html.contains(r#"<meta http-equiv="refresh" content="2;URL=https://shop.example/p/1">"#));
        // Stage 0: app invocation after a short delay.
        assert!(html.contains("setTimeout(tryOpenApp, 300)"));
        assert!(html.contains(r#""shopapp://open?url=https%3A%2F%2Fshop.example%2Fp%2F1""#));
        assert!(html.contains("intent://open?url="));
        assert!(html.contains("package=com.example.shop"));
        assert!(html.contains("S.browser_fallback_url="));
        // Stage 1: iOS visibility-checked fallback.
        assert!(html.contains("1500"));
        // Stage 2: unconditional backstop.
        assert!(html.contains("3000"));
        assert!(html.contains("document.hidden"));
        // Manual affordance.
        assert!(html.contains(r#"<a href="https://shop.example/p/1" class="btn btn-primary" id="openBtn">"#));
    }

    #[test]
    fn test_both_variants_escape_markup_in_fields() {
        let record = link(
            r#"<script>alert("x")</script>"#,
            "Tom & Jerry's <best> show",
            "",
            "https://example.com/page",
        );

        for requester in [Requester::Crawler, Requester::Client] {
            let html = service().render(&record, requester, ORIGIN).unwrap();
            assert!(!html.contains("<script>alert"), "unescaped title in {requester:?}");
            assert!(html.contains("&lt;script&gt;"));
            assert!(html.contains("&amp; Jerry"));
            assert!(html.contains("&lt;best&gt;"));
            assert!(!html.contains("Jerry's <best>"));
        }
    }

    #[test]
    fn test_empty_title_falls_back() {
        let record = link("", "", "", "https://example.com");
        let html = service()
            .render(&record, Requester::Crawler, ORIGIN)
            .unwrap();
        assert!(html.contains("<title>Link preview</title>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = link("Shoes", "Desc", "", "https://example.com");
        let service = service();
        let a = service.render(&record, Requester::Client, ORIGIN).unwrap();
        let b = service.render(&record, Requester::Client, ORIGIN).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_js_string_literal_neutralizes_script_close() {
        let encoded = js_string_literal("https://evil.example/</script><script>alert(1)");
        assert!(!encoded.contains("</script>"));
        assert!(encoded.contains("\\u003c/script"));
        assert!(encoded.starts_with('"') && encoded.ends_with('"'));
    }

    #[test]
    fn test_deep_link_and_intent_synthesis() {
        let service = service();
        assert_eq!(
            service.deep_link("https://shop.example/p/1?a=b"),
            "shopapp://open?url=https%3A%2F%2Fshop.example%2Fp%2F1%3Fa%3Db"
        );
        let intent = service.intent_url("https://shop.example/p/1");
        assert!(intent.starts_with("intent://open?url=https%3A%2F%2Fshop.example%2Fp%2F1#Intent;"));
        assert!(intent.contains("scheme=shopapp;"));
        assert!(intent.ends_with(";end"));
    }
}
