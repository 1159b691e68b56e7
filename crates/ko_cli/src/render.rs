use ko_core::{ArticleAnalysis, SearchResult};

pub fn article_header(rank: usize, result: &SearchResult) -> String {
    format!("\n——— 📄 第 {} 名：{}\n    {}", rank, result.title, result.link)
}

pub fn article_block(analysis: &ArticleAnalysis) -> String {
    let mut block = String::new();

    if !analysis.pros.is_empty() {
        block.push_str("💚 優點：\n");
        for pro in &analysis.pros {
            block.push_str(&format!("- {}\n", pro));
        }
    }
    if !analysis.cons.is_empty() {
        block.push_str("💔 缺點：\n");
        for con in &analysis.cons {
            block.push_str(&format!("- {}\n", con));
        }
    }
    if !analysis.outline.is_empty() {
        block.push_str("📝 大綱：\n");
        block.push_str(&analysis.outline);
    }

    block
}

pub fn final_outline(outline: &str) -> String {
    format!(
        "\n——— 🧠 綜合建議大綱（可作為你文章的架構起點）\n\n{}\n",
        outline
    )
}
