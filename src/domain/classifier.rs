//! Requester classification from the User-Agent string.
//!
//! Social networks and search engines fetch shared links with distinctive
//! User-Agent signatures to build previews. Classification is a
//! case-insensitive substring match against an explicit signature list;
//! anything unmatched is treated as an interactive client. Unlisted fetchers
//! are therefore misclassified as clients until the list is extended
//! (`EXTRA_CRAWLER_SIGNATURES`). The classifier never looks at anything
//! beyond the agent string.

/// Who is asking for a short link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester {
    /// An automated preview fetcher (link unfurler or web indexer).
    Crawler,
    /// An interactive end-user agent.
    Client,
}

/// Known preview-fetcher and indexer signatures.
const CRAWLER_SIGNATURES: &[&str] = &[
    "facebookexternalhit",
    "Facebot",
    "LinkedInBot",
    "Twitterbot",
    "WhatsApp",
    "TelegramBot",
    "Slackbot",
    "Discordbot",
    "Pinterest",
    "Googlebot",
    "bingbot",
];

/// Signature-list based requester classifier.
#[derive(Debug, Clone)]
pub struct RequesterClassifier {
    /// Lowercased signatures; matching lowercases the agent string once.
    signatures: Vec<String>,
}

impl RequesterClassifier {
    /// Builds a classifier from the built-in list plus extra signatures.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut signatures: Vec<String> = CRAWLER_SIGNATURES
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        signatures.extend(
            extra
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        Self { signatures }
    }

    /// Classifies a User-Agent string.
    pub fn classify(&self, user_agent: &str) -> Requester {
        let ua = user_agent.to_lowercase();
        if self.signatures.iter().any(|sig| ua.contains(sig)) {
            Requester::Crawler
        } else {
            Requester::Client
        }
    }

    /// The configured signature list (lowercased).
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }
}

impl Default for RequesterClassifier {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
