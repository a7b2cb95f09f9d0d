//! カタログ検索の型定義
//!
//! CLIとライブラリで共有される型:
//! - CatalogEntry: カタログの1レコード（読み取り専用）
//! - ScoredEntry: 検索結果（CatalogEntry + 類似度）

use serde::{Deserialize, Serialize};

/// カタログエントリ（技術参照レコード）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,

    /// NM-###-#### 形式のコード
    pub code: String,

    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub unit: String,

    /// 単価（未設定は「N/A」表示、0とは区別する）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default)]
    pub source: String,
}

/// 類似度付きの検索結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: CatalogEntry,

    /// 類似度 (0-100)
    pub similarity: f64,

    /// コード完全一致
    pub is_exact_match: bool,
}

impl ScoredEntry {
    pub fn new(entry: &CatalogEntry, similarity: f64, is_exact_match: bool) -> Self {
        Self {
            entry: entry.clone(),
            similarity,
            is_exact_match,
        }
    }

    pub fn id(&self) -> &str {
        &self.entry.id
    }

    pub fn code(&self) -> &str {
        &self.entry.code
    }

    /// 表示用に丸めた類似度
    pub fn similarity_percent(&self) -> u32 {
        self.similarity.round().clamp(0.0, 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry {
            id: "9".to_string(),
            code: "NM-009-2024".to_string(),
            description: "Bomba submersível".to_string(),
            category: "Equipamentos Rotativos".to_string(),
            unit: "UN".to_string(),
            price: None,
            source: "teste.xlsx".to_string(),
        }
    }

    #[test]
    fn test_scored_entry_serialize() {
        let scored = ScoredEntry::new(&sample_entry(), 87.0, false);

        let json = serde_json::to_string(&scored).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"9\""));
        assert!(json.contains("\"code\":\"NM-009-2024\""));
        assert!(json.contains("\"isExactMatch\":false"));
        assert!(json.contains("\"similarity\":87.0"));
        // 単価なしはフィールドごと省略
        assert!(!json.contains("price"));
    }

    #[test]
    fn test_catalog_entry_deserialize_defaults() {
        let json = r#"{
            "id": "7",
            "code": "NM-007-2024",
            "description": "Registro de esfera"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.id, "7");
        assert_eq!(entry.price, None);
        assert_eq!(entry.category, "");
    }

    #[test]
    fn test_similarity_percent_rounds() {
        let scored = ScoredEntry::new(&sample_entry(), 64.5, false);
        assert_eq!(scored.similarity_percent(), 65);

        let scored = ScoredEntry::new(&sample_entry(), 41.2, false);
        assert_eq!(scored.similarity_percent(), 41);
    }
}
