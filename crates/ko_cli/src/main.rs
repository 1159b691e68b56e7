use clap::Parser;
use ko_core::{ArticleAnalysis, Result};
use ko_extract::ContentExtractor;
use ko_inference::{analyse_article, create_model, propose_better_outline, CompletionModel, Config};
use ko_search::SearchClient;
use tracing::{info, warn};

mod render;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Analyse the top search results for a keyword and propose a better content outline"
)]
struct Cli {
    /// Keyword to analyse
    keyword: String,

    /// Number of search results to fetch and analyse
    #[arg(long, short = 'n', default_value_t = 5)]
    results: usize,

    /// Completion model identifier
    #[arg(long, default_value = "gpt-4o")]
    model: String,
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| anyhow::anyhow!("environment variable {} is not set", name).into())
}

/// Analyses extracted article text, or skips the article entirely when
/// nothing was extracted. One attempt per search result, never more.
async fn maybe_analyse(
    model: &dyn CompletionModel,
    text: &str,
    url: &str,
) -> Result<Option<ArticleAnalysis>> {
    if text.is_empty() {
        return Ok(None);
    }
    analyse_article(model, text, url).await.map(Some)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let serp_key = require_env("SERPAPI_API_KEY")?;
    let openai_key = require_env("OPENAI_API_KEY")?;

    let search = SearchClient::new(serp_key);
    let extractor = ContentExtractor::new();
    let model = create_model(Config::new(openai_key).with_model(cli.model.clone()))?;
    info!("🧠 Completion model initialized (using {})", model.name());

    info!("🔍 Fetching top {} results for {:?}", cli.results, cli.keyword);
    let results = search.top_results(&cli.keyword, cli.results).await?;
    if results.is_empty() {
        println!("❌ 找不到搜尋結果，請更換關鍵字或檢查 SerpAPI 設定");
        return Ok(());
    }
    info!("✨ Got {} results", results.len());

    let mut analyses = Vec::new();
    for (i, result) in results.iter().enumerate() {
        println!("{}", render::article_header(i + 1, result));

        let text = match extractor.extract(&result.link).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to fetch {}: {}", result.link, e);
                String::new()
            }
        };

        match maybe_analyse(model.as_ref(), &text, &result.link).await? {
            Some(analysis) => {
                print!("{}", render::article_block(&analysis));
                analyses.push(analysis);
            }
            None => {
                println!("⚠️ 擷取文章失敗，跳過此篇");
            }
        }
    }

    if analyses.is_empty() {
        println!("❌ 沒有任何文章分析成功，無法產生建議大綱");
        return Ok(());
    }

    info!("🧠 Synthesizing recommended outline from {} analyses", analyses.len());
    let outline = propose_better_outline(model.as_ref(), &analyses, &cli.keyword).await?;
    println!("{}", render::final_outline(&outline));

    Ok(())
}
