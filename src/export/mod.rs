//! 選択とエクスポート
//!
//! 検索結果からidで複数選択し、形式タグ付きでエクスポートを依頼する。
//! ファイル書き出しは行わず、件数と形式のサマリーを返す。

pub mod selection;

pub use selection::Selection;

use crate::error::{NmSearchError, Result};
use nm_search_common::ScoredEntry;

/// エクスポート形式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Clipboard,
    Csv,
    Excel,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clipboard" | "copy" | "copiar" => Ok(ExportFormat::Clipboard),
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use clipboard, csv, or excel", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Clipboard => write!(f, "CLIPBOARD"),
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Excel => write!(f, "EXCEL"),
        }
    }
}

/// エクスポート結果
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    pub entries: Vec<ScoredEntry>,
}

impl ExportSummary {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// 選択された結果をエクスポート
///
/// 並びは検索結果の順。選択が空（または結果に存在しないidのみ）ならエラー。
pub fn export_selection(
    results: &[ScoredEntry],
    selection: &Selection,
    format: ExportFormat,
) -> Result<ExportSummary> {
    let entries: Vec<ScoredEntry> = results
        .iter()
        .filter(|r| selection.contains(r.id()))
        .cloned()
        .collect();

    if entries.is_empty() {
        return Err(NmSearchError::NothingSelected);
    }

    Ok(ExportSummary { format, entries })
}
