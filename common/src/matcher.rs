//! 検索マッチャー
//!
//! 2つの検索モード:
//! - セマンティック: 乱数ベースライン + キーワードによる下限引き上げ
//! - ハイブリッド: NMコード完全一致を先頭に固定、見つからなければセマンティックへ
//!
//! 並び替えはすべて安定ソート（同点はカタログ順を維持）。

use crate::catalog::{looks_like_code, Catalog};
use crate::random::RandomSource;
use crate::types::ScoredEntry;
use serde::{Deserialize, Serialize};

/// キーワードと類似度の下限
pub const KEYWORD_FLOORS: [(&str, f64); 4] = [
    ("bomba", 95.0),
    ("válvula", 92.0),
    ("motor", 90.0),
    ("tubo", 88.0),
];

/// セマンティック検索のベースライン範囲 [50, 90)
const SEMANTIC_BASE: f64 = 50.0;
const SEMANTIC_SPREAD: f64 = 40.0;

/// ハイブリッド検索の関連候補の範囲 [40, 70)
const RELATED_BASE: f64 = 40.0;
const RELATED_SPREAD: f64 = 30.0;

/// 完全一致の類似度
pub const EXACT_SIMILARITY: f64 = 100.0;

/// 検索モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Semantic,
    Hybrid,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "semantic" | "semantica" | "semântica" => Ok(SearchMode::Semantic),
            "hybrid" | "hibrida" | "híbrida" => Ok(SearchMode::Hybrid),
            _ => Err(format!("Unknown mode: {}. Use semantic or hybrid", s)),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Semantic => write!(f, "semantic"),
            SearchMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// カタログと乱数ソースを保持するマッチャー
pub struct Matcher<'a, R: RandomSource> {
    catalog: &'a Catalog,
    rng: R,
}

impl<'a, R: RandomSource> Matcher<'a, R> {
    pub fn new(catalog: &'a Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// モードに応じて検索
    pub fn search(&mut self, mode: SearchMode, query: &str, limit: usize) -> Vec<ScoredEntry> {
        match mode {
            SearchMode::Semantic => self.semantic_match(query, limit),
            SearchMode::Hybrid => self.hybrid_match(query, limit),
        }
    }

    /// セマンティック検索（完全一致フラグは常にfalse）
    pub fn semantic_match(&mut self, query: &str, limit: usize) -> Vec<ScoredEntry> {
        let catalog = self.catalog;
        let terms = query.to_lowercase();

        let mut results: Vec<ScoredEntry> = catalog
            .entries()
            .iter()
            .map(|entry| {
                let mut similarity = self.rng.next_f64() * SEMANTIC_SPREAD + SEMANTIC_BASE;

                let description = entry.description.to_lowercase();
                for (keyword, floor) in KEYWORD_FLOORS {
                    if terms.contains(keyword) && description.contains(keyword) {
                        similarity = similarity.max(floor);
                    }
                }

                ScoredEntry::new(entry, similarity.round(), false)
            })
            .collect();

        sort_by_similarity(&mut results);
        results.truncate(limit);
        results
    }

    /// ハイブリッド検索
    ///
    /// NMコード形式かつカタログに存在する場合は完全一致を先頭に置き、
    /// 残りを [40, 70) の類似度で `limit - 1` 件まで続ける。
    pub fn hybrid_match(&mut self, query: &str, limit: usize) -> Vec<ScoredEntry> {
        let catalog = self.catalog;
        let trimmed = query.trim();

        if looks_like_code(trimmed) {
            if let Some(exact) = catalog.find_by_code(trimmed) {
                if limit == 0 {
                    return Vec::new();
                }

                let mut related: Vec<ScoredEntry> = catalog
                    .entries()
                    .iter()
                    .filter(|e| e.id != exact.id)
                    .map(|e| {
                        let similarity = self.rng.next_f64() * RELATED_SPREAD + RELATED_BASE;
                        ScoredEntry::new(e, similarity, false)
                    })
                    .collect();

                sort_by_similarity(&mut related);
                related.truncate(limit - 1);

                let mut results = Vec::with_capacity(related.len() + 1);
                results.push(ScoredEntry::new(exact, EXACT_SIMILARITY, true));
                results.extend(related);
                return results;
            }
        }

        self.semantic_match(query, limit)
    }
}

/// 類似度の降順に安定ソート
fn sort_by_similarity(results: &mut [ScoredEntry]) {
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}
