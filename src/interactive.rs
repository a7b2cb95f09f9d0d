//! 対話式の結果選択

use crate::error::{NmSearchError, Result};
use crate::export::{ExportFormat, Selection};
use dialoguer::{MultiSelect, Select};
use nm_search_common::ScoredEntry;

const FORMATS: [ExportFormat; 3] = [
    ExportFormat::Clipboard,
    ExportFormat::Csv,
    ExportFormat::Excel,
];

/// 選択肢のラベル
pub fn item_label(result: &ScoredEntry) -> String {
    let mut description = result.entry.description.clone();
    if description.chars().count() > 60 {
        description = description.chars().take(57).collect::<String>() + "...";
    }
    format!(
        "{} ({}%) {}",
        result.code(),
        result.similarity_percent(),
        description
    )
}

/// チェックボックスで結果を選択
pub fn select_results(results: &[ScoredEntry]) -> Result<Selection> {
    if results.is_empty() {
        return Ok(Selection::new());
    }

    let labels: Vec<String> = results.iter().map(item_label).collect();
    let picked = MultiSelect::new()
        .with_prompt("Selecione os itens (espaço marca, Enter confirma)")
        .items(&labels)
        .interact()
        .map_err(|e| NmSearchError::Interaction(e.to_string()))?;

    Ok(Selection::from_ids(
        picked.into_iter().map(|i| results[i].id().to_string()),
    ))
}

/// エクスポート形式を選択
pub fn select_format() -> Result<ExportFormat> {
    let labels = ["Copiar", "CSV", "Excel"];
    let idx = Select::new()
        .with_prompt("Formato de exportação")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| NmSearchError::Interaction(e.to_string()))?;

    Ok(FORMATS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nm_search_common::Catalog;

    #[test]
    fn test_item_label_truncates_description() {
        let catalog = Catalog::builtin();
        let result = ScoredEntry::new(&catalog.entries()[0], 95.0, false);

        let label = item_label(&result);
        assert!(label.starts_with("NM-001-2024 (95%) Bomba"));
        assert!(label.ends_with("..."));
    }
}
