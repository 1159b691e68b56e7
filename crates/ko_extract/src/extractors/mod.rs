use scraper::Html;

pub mod paragraphs;
pub mod semantic;

use paragraphs::ParagraphExtractor;
use semantic::SemanticExtractor;

/// A single body-text extraction strategy. Strategies are tried in
/// registration order; the first one that yields acceptable text wins.
pub trait BodyExtractor: Send + Sync {
    /// Returns the name of the strategy, for log lines.
    fn name(&self) -> &str;

    /// Extracts main-body text from a parsed document, or None if this
    /// strategy finds nothing usable.
    fn extract(&self, document: &Html) -> Option<String>;
}

/// The default strategy chain: semantic containers first, then the
/// whole-document paragraph fallback.
pub fn default_extractors() -> Vec<Box<dyn BodyExtractor>> {
    vec![
        Box::new(SemanticExtractor::new()),
        Box::new(ParagraphExtractor::new()),
    ]
}

pub(crate) mod utils {
    use scraper::{ElementRef, Html, Selector};

    pub fn collect_paragraphs(root: ElementRef<'_>) -> Vec<String> {
        let selector = Selector::parse("p").unwrap();
        root.select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    pub fn document_paragraphs(document: &Html) -> Vec<String> {
        let selector = Selector::parse("p").unwrap();
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}
