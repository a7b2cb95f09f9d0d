//! 検索結果の表示

use crate::export::Selection;
use nm_search_common::ScoredEntry;

/// 単価をBRL形式に（未設定・0は「N/A」）
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value != 0.0 && value.is_finite() => format_brl(value),
        _ => "N/A".to_string(),
    }
}

/// 15750.0 → "R$ 15.750,00"
fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// 類似度の段階（表示色の目安）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    High,
    Good,
    Fair,
    Low,
}

impl SimilarityBand {
    pub fn of(similarity: f64) -> Self {
        if similarity >= 90.0 {
            SimilarityBand::High
        } else if similarity >= 70.0 {
            SimilarityBand::Good
        } else if similarity >= 50.0 {
            SimilarityBand::Fair
        } else {
            SimilarityBand::Low
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            SimilarityBand::High => "●",
            SimilarityBand::Good => "◕",
            SimilarityBand::Fair => "◑",
            SimilarityBand::Low => "○",
        }
    }
}

/// 1件分のカード表示
pub fn render_entry(index: usize, result: &ScoredEntry, selected: bool) -> String {
    let entry = &result.entry;
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let badge = if result.is_exact_match {
        "  [Correspondência Exata]"
    } else {
        ""
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "{} {:>2}. #{}{}  {} {}% similar",
        checkbox,
        index + 1,
        entry.code,
        badge,
        SimilarityBand::of(result.similarity).glyph(),
        result.similarity_percent()
    ));
    lines.push(format!("       {}", entry.description));
    lines.push(format!(
        "       Categoria: {} | Unidade: {} | Preço: {} | Fonte: {}",
        entry.category,
        entry.unit,
        format_price(entry.price),
        entry.source
    ));
    lines.join("\n")
}

/// 結果一覧の表示
pub fn render_results(results: &[ScoredEntry], selection: &Selection) -> String {
    if results.is_empty() {
        return "Nenhum resultado encontrado. Tente usar termos diferentes ou ajustar os filtros."
            .to_string();
    }

    let selected = results.iter().filter(|r| selection.contains(r.id())).count();
    let mut out = if selection.covers(results) {
        format!("[x] Todos os {} selecionados\n", results.len())
    } else {
        format!("{} de {} selecionados\n", selected, results.len())
    };
    for (i, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_entry(i, result, selection.contains(result.id())));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nm_search_common::Catalog;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(15750.0)), "R$ 15.750,00");
        assert_eq!(format_price(Some(285.5)), "R$ 285,50");
        assert_eq!(format_price(Some(1234567.891)), "R$ 1.234.567,89");
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_price(Some(0.0)), "N/A");
    }

    #[test]
    fn test_similarity_band() {
        assert_eq!(SimilarityBand::of(95.0), SimilarityBand::High);
        assert_eq!(SimilarityBand::of(70.0), SimilarityBand::Good);
        assert_eq!(SimilarityBand::of(50.0), SimilarityBand::Fair);
        assert_eq!(SimilarityBand::of(43.2), SimilarityBand::Low);
    }

    #[test]
    fn test_render_exact_badge_and_rounding() {
        let catalog = Catalog::builtin();
        let exact = ScoredEntry::new(&catalog.entries()[0], 100.0, true);
        let related = ScoredEntry::new(&catalog.entries()[1], 57.6, false);

        let text = render_results(&[exact, related], &Selection::from_ids(["1"]));
        assert!(text.starts_with("1 de 2 selecionados"));
        assert!(text.contains("[x]  1. #NM-001-2024  [Correspondência Exata]"));
        assert!(text.contains("58% similar"));
        assert!(text.contains("Preço: R$ 2.850,00"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render_results(&[], &Selection::new()).starts_with("Nenhum resultado"));
    }

    #[test]
    fn test_render_all_selected_header() {
        let catalog = Catalog::builtin();
        let results: Vec<ScoredEntry> = catalog
            .entries()
            .iter()
            .take(2)
            .map(|e| ScoredEntry::new(e, 80.0, false))
            .collect();

        let mut selection = Selection::all(&results);
        let text = render_results(&results, &selection);
        assert!(text.starts_with("[x] Todos os 2 selecionados"));

        selection.exclude(["2"]);
        let text = render_results(&results, &selection);
        assert!(text.starts_with("1 de 2 selecionados"));
        assert!(text.contains("[ ]  2."));
    }
}
