use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ko_core::Result;

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// A chat-completion backend. One system message, one user message,
/// one reply.
#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Builds the completion model named by the configuration. "dummy"
/// selects the offline model; anything else is treated as an OpenAI
/// model identifier.
pub fn create_model(config: Config) -> Result<Arc<dyn CompletionModel>> {
    match config.model_name.as_str() {
        "dummy" => Ok(Arc::new(DummyModel::new())),
        _ => Ok(Arc::new(OpenAiModel::new(config)?)),
    }
}
