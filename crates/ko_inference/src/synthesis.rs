use ko_core::{ArticleAnalysis, Result};
use tracing::error;

use crate::critique::truncate_chars;
use crate::models::CompletionModel;

/// The combined competitor digest is capped at this many characters.
const PROMPT_CHAR_BUDGET: usize = 3500;

fn system_prompt(keyword: &str) -> String {
    format!(
        "你是一名15年經驗的資深 SEO 顧問，擅長分析內容、提取重點，並彙整成新文章的架構，因此每次都能讓關鍵字排名進入前三名，請根據以下資訊，重新設計一篇以『{}』為主題的完整內容大綱：

- 整合競品的優缺點與文章架構
- 補足缺漏的觀點（如：實際案例、比較分析、使用者痛點、金融術語等）
- 依照 SEO 結構輸出完整的 H2 / H3 大綱
- 使用繁體中文",
        keyword
    )
}

/// Flattens every analysis into one competitor digest: all pros as
/// bullets, all cons as bullets, all outlines joined double-newline
/// separated.
pub(crate) fn build_digest(analyses: &[ArticleAnalysis]) -> String {
    let pros = analyses
        .iter()
        .flat_map(|a| a.pros.iter())
        .map(|p| format!("- {}", p))
        .collect::<Vec<_>>()
        .join("\n");
    let cons = analyses
        .iter()
        .flat_map(|a| a.cons.iter())
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");
    let outlines = analyses
        .iter()
        .map(|a| a.outline.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "【競品優點】\n{}\n\n【競品缺點】\n{}\n\n【競品大綱】\n{}",
        pros, cons, outlines
    )
}

/// Synthesizes one recommended outline for the keyword from every
/// competitor analysis. Returns the trimmed raw completion text; the
/// reply is not parsed further.
pub async fn propose_better_outline(
    model: &dyn CompletionModel,
    analyses: &[ArticleAnalysis],
    keyword: &str,
) -> Result<String> {
    let digest = truncate_chars(&build_digest(analyses), PROMPT_CHAR_BUDGET);

    let reply = match model.complete(&system_prompt(keyword), &digest).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Outline synthesis failed for {:?}: {}", keyword, e);
            return Err(e);
        }
    };

    Ok(reply.trim().to_string())
}
