use scraper::{Html, Selector};

use super::utils;
use super::BodyExtractor;

/// Selectors that usually wrap the main article body, in preference
/// order. Matches the containers most publishing platforms emit.
const CONTAINER_SELECTORS: &[&str] = &[
    "article",
    "main",
    "div[itemprop='articleBody']",
    "div.post-content",
    "div.entry-content",
];

/// Primary strategy: find a semantic article container and join the
/// paragraph text inside it.
pub struct SemanticExtractor;

impl SemanticExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemanticExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyExtractor for SemanticExtractor {
    fn name(&self) -> &str {
        "semantic"
    }

    fn extract(&self, document: &Html) -> Option<String> {
        for selector_str in CONTAINER_SELECTORS {
            let selector = Selector::parse(selector_str).unwrap();
            if let Some(container) = document.select(&selector).next() {
                let paragraphs = utils::collect_paragraphs(container);
                if !paragraphs.is_empty() {
                    return Some(paragraphs.join("\n\n"));
                }
            }
        }
        None
    }
}
