use ko_core::{Error, Result};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, warn};
use url::Url;

pub mod extractors;

pub use extractors::BodyExtractor;

use extractors::default_extractors;

/// Primary-strategy text shorter than this is treated as a missed
/// container (boilerplate, cookie banner) and the fallback runs instead.
const MIN_CONTENT_CHARS: usize = 200;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

/// Fetches a result page and extracts best-effort main-body text.
/// Network errors surface as Err; a page we fetched but could not read
/// anything from yields an empty string.
pub struct ContentExtractor {
    client: Client,
    extractors: Vec<Box<dyn BodyExtractor>>,
}

impl ContentExtractor {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            extractors: default_extractors(),
        }
    }

    pub async fn extract(&self, url: &str) -> Result<String> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Extraction(format!("{} returned {}", url, status)));
        }
        let html = response.text().await?;

        Ok(self.extract_from_html(&html))
    }

    /// Runs the strategy chain over already-fetched HTML. The first
    /// strategy must clear the minimum-length gate; later ones are
    /// best-effort and taken as-is.
    pub fn extract_from_html(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        for (i, extractor) in self.extractors.iter().enumerate() {
            match extractor.extract(&document) {
                Some(text) if i == 0 && text.chars().count() <= MIN_CONTENT_CHARS => {
                    debug!(
                        "{} extractor found only {} chars, trying fallback",
                        extractor.name(),
                        text.chars().count()
                    );
                }
                Some(text) => {
                    debug!("Extracted {} chars via {}", text.chars().count(), extractor.name());
                    return text;
                }
                None => {
                    debug!("{} extractor found nothing", extractor.name());
                }
            }
        }

        warn!("No extractor produced any text");
        String::new()
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
