//! 選択・エクスポートの統合テスト

use nm_search::error::NmSearchError;
use nm_search::export::{export_selection, ExportFormat, Selection};
use nm_search::notify::Notification;
use nm_search_common::{Catalog, Matcher, ScriptedRandom, ScoredEntry};

fn search_results() -> Vec<ScoredEntry> {
    let catalog = Catalog::builtin();
    let mut matcher = Matcher::new(&catalog, ScriptedRandom::new(vec![0.9, 0.1, 0.5, 0.3, 0.7]));
    matcher.hybrid_match("NM-003-2024", 5)
}

#[test]
fn test_export_keeps_result_order() {
    let results = search_results();
    // 選択順ではなく結果順
    let selection = Selection::from_ids(["4", "3"]);

    let summary = export_selection(&results, &selection, ExportFormat::Csv).unwrap();
    assert_eq!(summary.count(), 2);
    assert_eq!(summary.entries[0].id(), "3");
    assert!(summary.entries[0].is_exact_match);
    assert_eq!(summary.entries[1].id(), "4");
    assert_eq!(summary.format, ExportFormat::Csv);
}

#[test]
fn test_export_all() {
    let results = search_results();
    let selection = Selection::all(&results);

    let summary = export_selection(&results, &selection, ExportFormat::Excel).unwrap();
    assert_eq!(summary.count(), results.len());

    let notification = Notification::Exported {
        count: summary.count(),
        format: summary.format,
    };
    assert_eq!(
        notification.description(),
        "5 itens exportados em formato EXCEL."
    );
}

#[test]
fn test_export_empty_selection() {
    let results = search_results();

    let result = export_selection(&results, &Selection::new(), ExportFormat::Clipboard);
    assert!(matches!(result, Err(NmSearchError::NothingSelected)));
}

#[test]
fn test_export_ignores_ids_outside_results() {
    let results = search_results();
    // id 2 は6番目で切り捨て済み
    assert!(results.iter().all(|r| r.id() != "2"));
    let selection = Selection::from_ids(["2", "99"]);

    let result = export_selection(&results, &selection, ExportFormat::Csv);
    assert!(matches!(result, Err(NmSearchError::NothingSelected)));
}

#[test]
fn test_export_format_parse() {
    assert_eq!("copy".parse::<ExportFormat>(), Ok(ExportFormat::Clipboard));
    assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
    assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
    assert!("pdf".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::Clipboard.to_string(), "CLIPBOARD");
}
