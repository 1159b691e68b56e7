use ko_core::{Result, SearchResult};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";

#[derive(Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    title: Option<String>,
    link: Option<String>,
}

/// SerpApi client for the Google engine. Returns the top organic
/// results for a keyword in provider relevance order.
pub struct SearchClient {
    client: Client,
    api_key: String,
    locale: Locale,
}

/// Language/region codes sent with every query.
#[derive(Debug, Clone)]
pub struct Locale {
    pub hl: String,
    pub gl: String,
    pub google_domain: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            hl: "en".to_string(),
            gl: "us".to_string(),
            google_domain: "google.com".to_string(),
        }
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("locale", &self.locale)
            .finish()
    }
}

impl SearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Fetches up to `n` organic results for `keyword`. Entries with no
    /// link are dropped; a missing title becomes an empty string.
    pub async fn top_results(&self, keyword: &str, n: usize) -> Result<Vec<SearchResult>> {
        debug!("Querying SerpApi for {:?} (top {})", keyword, n);

        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("engine", "google"),
                ("q", keyword),
                ("api_key", &self.api_key),
                ("num", &n.to_string()),
                ("hl", &self.locale.hl),
                ("gl", &self.locale.gl),
                ("google_domain", &self.locale.google_domain),
            ])
            .send()
            .await?
            .json::<SerpResponse>()
            .await?;

        Ok(collect_results(response, n))
    }
}

fn collect_results(response: SerpResponse, n: usize) -> Vec<SearchResult> {
    response
        .organic_results
        .into_iter()
        .take(n)
        .filter_map(|o| {
            o.link.map(|link| SearchResult {
                title: o.title.unwrap_or_default(),
                link,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> SerpResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_parse_organic_results() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"position": 1, "title": "First", "link": "https://a.example/1"},
                {"position": 2, "title": "Second", "link": "https://b.example/2"}
            ]
        }"#;

        let results = collect_results(parse(body), 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "First");
        assert_eq!(results[1].link, "https://b.example/2");
    }

    #[test]
    fn test_caps_at_requested_count() {
        let body = r#"{"organic_results": [
            {"title": "a", "link": "https://a"},
            {"title": "b", "link": "https://b"},
            {"title": "c", "link": "https://c"}
        ]}"#;

        let results = collect_results(parse(body), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_skips_entries_without_link() {
        let body = r#"{"organic_results": [
            {"title": "no link here"},
            {"link": "https://untitled.example"}
        ]}"#;

        let results = collect_results(parse(body), 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].link, "https://untitled.example");
    }

    #[test]
    fn test_missing_organic_results_field() {
        let results = collect_results(parse(r#"{"search_metadata": {}}"#), 5);
        assert!(results.is_empty());
    }
}
