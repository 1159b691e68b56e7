use std::fmt;

use async_trait::async_trait;
use ko_core::Result;

use super::CompletionModel;

const CANNED_REPLY: &str = "### 優點\n- 內容完整\n\n### 缺點\n- 缺乏案例\n\n### 大綱\nH2: 介紹\nH3: 細節\n";

/// Offline model for tests. Ignores the prompts and replies with a
/// fixed (or caller-supplied) string.
pub struct DummyModel {
    reply: String,
}

impl DummyModel {
    pub fn new() -> Self {
        Self {
            reply: CANNED_REPLY.to_string(),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model_replies() {
        let model = DummyModel::new();
        let reply = model.complete("system", "user").await.unwrap();
        assert!(reply.contains("### 優點"));

        let model = DummyModel::with_reply("custom");
        assert_eq!(model.complete("s", "u").await.unwrap(), "custom");
    }
}
