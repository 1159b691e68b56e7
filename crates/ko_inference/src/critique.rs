use ko_core::{ArticleAnalysis, Result};
use tracing::error;

use crate::models::CompletionModel;
use crate::parser::parse_analysis;

/// Article text sent to the model is capped at this many characters.
const ARTICLE_CHAR_BUDGET: usize = 3000;

const SYSTEM_PROMPT: &str = "你是一位具有15年經驗的資深 SEO 顧問，請根據以下文章內容完成三件事：
1. 條列出文章比其他文章好的『優點』（Pros）：用 - 開頭每一項
2. 條列出文章比其他文章缺乏的『缺點』（Cons）：用 - 開頭每一項
3. 請輸出完整的大綱（以 H2 / H3 分層），加上缺漏應補內容（如投資觀點、比較、誤區等）
請務必用如下格式回答：
### 優點
- ...
- ...

### 缺點
- ...
- ...

### 大綱
H2: ...
H3: ...
請用繁體中文回答。";

/// Asks the model to critique one article and parses the reply.
/// Completion failures are logged and propagated; the caller decides
/// whether the run survives.
pub async fn analyse_article(
    model: &dyn CompletionModel,
    text: &str,
    url: &str,
) -> Result<ArticleAnalysis> {
    let truncated = truncate_chars(text, ARTICLE_CHAR_BUDGET);
    let user_prompt = format!("文章網址：{}\n\n文章內容如下：\n{}", url, truncated);

    let reply = match model.complete(SYSTEM_PROMPT, &user_prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Completion failed for {}: {}", url, e);
            return Err(e);
        }
    };

    Ok(parse_analysis(&reply))
}

/// Character-budget truncation. Counts chars, not bytes, so multi-byte
/// article text never gets split mid-character.
pub(crate) fn truncate_chars(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;

    #[tokio::test]
    async fn test_analyse_article_parses_reply() {
        let model = DummyModel::new();
        let analysis = analyse_article(&model, "article body", "https://a.example")
            .await
            .unwrap();
        assert_eq!(analysis.pros, vec!["內容完整"]);
        assert_eq!(analysis.cons, vec!["缺乏案例"]);
        assert!(analysis.outline.starts_with("### 大綱\n"));
    }

    #[tokio::test]
    async fn test_unstructured_reply_degrades_to_empty_analysis() {
        let model = DummyModel::with_reply("no sections at all");
        let analysis = analyse_article(&model, "text", "https://a.example")
            .await
            .unwrap();
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "漲".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated.chars().count(), 4);
        assert_eq!(truncated, "漲漲漲漲");
    }

    #[test]
    fn test_truncation_noop_under_budget() {
        assert_eq!(truncate_chars("short", 3000), "short");
    }
}
