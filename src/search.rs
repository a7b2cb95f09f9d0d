//! 検索実行
//!
//! 擬似的な待ち時間の後にマッチャーを呼び出す。待ち時間は呼び出し側の演出で、
//! 結果には影響しない。

use crate::error::{NmSearchError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nm_search_common::{Catalog, Matcher, RandomSource, ScoredEntry, SearchMode};
use std::time::Duration;

/// 検索リクエスト
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub mode: SearchMode,
    pub limit: usize,
}

impl SearchRequest {
    /// 前後の空白を除去。空のクエリは受け付けない
    pub fn new(query: &str, mode: SearchMode, limit: usize) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(NmSearchError::EmptyQuery);
        }

        Ok(Self {
            query: query.to_string(),
            mode,
            limit,
        })
    }
}

/// 検索オプション
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub delay: Duration,
    pub show_spinner: bool,
    pub verbose: bool,
}

/// 待ち時間の後に検索を実行
pub async fn run_search<R: RandomSource>(
    catalog: &Catalog,
    rng: R,
    request: &SearchRequest,
    options: &SearchOptions,
) -> Vec<ScoredEntry> {
    if options.verbose {
        println!(
            "  modo: {} / limite: {} / catálogo: {} itens",
            request.mode,
            request.limit,
            catalog.len()
        );
    }

    simulate_latency(options).await;

    let mut matcher = Matcher::new(catalog, rng);
    let results = matcher.search(request.mode, &request.query, request.limit);

    if options.verbose {
        for r in &results {
            println!("  {} -> {:.2}", r.code(), r.similarity);
        }
    }

    results
}

async fn simulate_latency(options: &SearchOptions) {
    if options.delay.is_zero() {
        return;
    }

    if !options.show_spinner {
        tokio::time::sleep(options.delay).await;
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Buscando...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    tokio::time::sleep(options.delay).await;

    spinner.finish_and_clear();
}
