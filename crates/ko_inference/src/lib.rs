pub mod critique;
pub mod models;
pub mod parser;
pub mod synthesis;

pub use critique::analyse_article;
pub use models::{create_model, CompletionModel};
pub use parser::parse_analysis;
pub use synthesis::propose_better_outline;

/// Explicit model configuration, passed into constructors. Credentials
/// never live in process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model_name: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model_name: "gpt-4o".to_string(),
            base_url: models::openai::OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model_name: String) -> Self {
        self.model_name = model_name;
        self
    }
}

pub mod prelude {
    pub use super::models::CompletionModel;
    pub use super::Config;
    pub use ko_core::{ArticleAnalysis, Error, Result, SearchResult};
}
