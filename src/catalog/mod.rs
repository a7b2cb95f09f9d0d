//! カタログファイル読み込み
//!
//! 拡張子で形式を判定:
//! - .json: CatalogEntryの配列
//! - .xlsx / .xlsm / .xls / .ods: 先頭シート（1行目はヘッダー）

pub mod xlsx;

use crate::error::{NmSearchError, Result};
use nm_search_common::Catalog;
use std::path::Path;

/// パス指定があればファイルから、なければ組み込みカタログ
pub fn load_or_builtin(path: Option<&Path>, verbose: bool) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            if verbose {
                println!("  catálogo: {} ({} itens)", path.display(), catalog.len());
            }
            Ok(catalog)
        }
        None => {
            if verbose {
                println!("  catálogo: embutido");
            }
            Ok(Catalog::builtin())
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(NmSearchError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let content = std::fs::read_to_string(path)?;
            Catalog::from_json(&content).map_err(invalid_catalog)
        }
        "xlsx" | "xlsm" | "xls" | "ods" => xlsx::read_catalog(path),
        _ => Err(NmSearchError::UnsupportedCatalogFormat(path.display().to_string())),
    }
}

/// 共通エラーはCLI側の型に寄せる
fn invalid_catalog(err: nm_search_common::Error) -> NmSearchError {
    match err {
        nm_search_common::Error::InvalidCatalog(msg) => NmSearchError::InvalidCatalog(msg),
        nm_search_common::Error::Json(e) => NmSearchError::JsonParse(e),
        nm_search_common::Error::Io(e) => NmSearchError::Io(e),
    }
}

pub(crate) fn validated(entries: Vec<nm_search_common::CatalogEntry>) -> Result<Catalog> {
    Catalog::validated(entries).map_err(invalid_catalog)
}
