use scraper::Html;

use super::utils;
use super::BodyExtractor;

/// Fallback strategy: join every `<p>` in the document, wherever it
/// lives. Noisy but better than nothing when no semantic container
/// exists.
pub struct ParagraphExtractor;

impl ParagraphExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParagraphExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyExtractor for ParagraphExtractor {
    fn name(&self) -> &str {
        "paragraphs"
    }

    fn extract(&self, document: &Html) -> Option<String> {
        let paragraphs = utils::document_paragraphs(document);
        if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs.join("\n\n"))
        }
    }
}
