use serde::{Deserialize, Serialize};

/// One organic search hit, in provider relevance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
}

/// Structured critique of one competitor article, as parsed from a
/// model reply. All fields are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub outline: String,
}

impl ArticleAnalysis {
    pub fn is_empty(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty() && self.outline.is_empty()
    }
}
