//! Excelカタログ読み込み（calamine）
//!
//! 1行目のヘッダー名で列を特定する。英語・ポルトガル語どちらの見出しも可。
//! id / code / description は必須、それ以外は省略可。

use crate::error::{NmSearchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use nm_search_common::{Catalog, CatalogEntry};
use std::path::Path;

/// 列の位置
#[derive(Debug, Default)]
struct Columns {
    id: Option<usize>,
    code: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    unit: Option<usize>,
    price: Option<usize>,
    source: Option<usize>,
}

impl Columns {
    fn from_header(header: &[Data]) -> Result<Self> {
        let mut columns = Columns::default();

        for (idx, cell) in header.iter().enumerate() {
            let name = cell_text(cell).to_lowercase();
            let slot = match name.as_str() {
                "id" => &mut columns.id,
                "code" | "código" | "codigo" => &mut columns.code,
                "description" | "descrição" | "descricao" => &mut columns.description,
                "category" | "categoria" => &mut columns.category,
                "unit" | "unidade" => &mut columns.unit,
                "price" | "preço" | "preco" => &mut columns.price,
                "source" | "fonte" => &mut columns.source,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }

        for (name, column) in [
            ("id", columns.id),
            ("code", columns.code),
            ("description", columns.description),
        ] {
            if column.is_none() {
                return Err(NmSearchError::Spreadsheet(format!(
                    "coluna obrigatória ausente: {}",
                    name
                )));
            }
        }

        Ok(columns)
    }
}

/// 先頭シートからカタログを読み込み
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| NmSearchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| NmSearchError::Spreadsheet("planilha sem abas".into()))?
        .map_err(|e| NmSearchError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| NmSearchError::Spreadsheet("planilha vazia".into()))?;
    let columns = Columns::from_header(header)?;

    let mut entries = Vec::new();
    // ヘッダーが1行目なのでデータは2行目から
    for (offset, row) in rows.enumerate() {
        if row.iter().all(|c| cell_text(c).is_empty()) {
            continue;
        }
        entries.push(read_row(row, &columns, offset + 2)?);
    }

    super::validated(entries)
}

fn read_row(row: &[Data], columns: &Columns, row_number: usize) -> Result<CatalogEntry> {
    let text = |column: Option<usize>| -> String {
        column
            .and_then(|idx| row.get(idx))
            .map(cell_text)
            .unwrap_or_default()
    };

    let price = match columns.price.and_then(|idx| row.get(idx)) {
        Some(cell) => cell_price(cell).map_err(|value| {
            NmSearchError::Spreadsheet(format!(
                "linha {}: preço inválido ({})",
                row_number, value
            ))
        })?,
        None => None,
    };

    Ok(CatalogEntry {
        id: text(columns.id),
        code: text(columns.code),
        description: text(columns.description),
        category: text(columns.category),
        unit: text(columns.unit),
        price,
        source: text(columns.source),
    })
}

/// セルを文字列に（整数値の数値セルは小数点なし）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// 単価セル。空は None、数値化できなければ元の文字列を返す
fn cell_price(cell: &Data) -> std::result::Result<Option<f64>, String> {
    let price = match cell {
        Data::Empty => Ok(None),
        Data::Float(f) => Ok(Some(*f)),
        Data::Int(i) => Ok(Some(*i as f64)),
        other => {
            let raw = cell_text(other);
            if raw.is_empty() {
                return Ok(None);
            }
            parse_price_text(&raw).ok_or(raw)
        }
    };
    price.map(|p| p.filter(|v| v.is_finite()))
}

/// 「15.750,00」「R$ 285,50」「2850.00」などを数値化
fn parse_price_text(raw: &str) -> Option<Option<f64>> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    normalized.parse::<f64>().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_text() {
        assert_eq!(parse_price_text("15.750,00"), Some(Some(15750.0)));
        assert_eq!(parse_price_text("R$ 285,50"), Some(Some(285.5)));
        assert_eq!(parse_price_text("2850.00"), Some(Some(2850.0)));
        assert_eq!(parse_price_text("sob consulta"), None);
    }

    #[test]
    fn test_cell_text_integer_float() {
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(3.5)), "3.5");
        assert_eq!(cell_text(&Data::String("  NM-001-2024 ".into())), "NM-001-2024");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_cell_price() {
        assert_eq!(cell_price(&Data::Empty), Ok(None));
        assert_eq!(cell_price(&Data::Float(425.0)), Ok(Some(425.0)));
        assert_eq!(cell_price(&Data::String(" ".into())), Ok(None));
        assert_eq!(cell_price(&Data::String("abc".into())), Err("abc".to_string()));
    }

    #[test]
    fn test_columns_require_code() {
        let header = vec![Data::String("id".into()), Data::String("descrição".into())];
        assert!(matches!(
            Columns::from_header(&header),
            Err(NmSearchError::Spreadsheet(_))
        ));
    }

    #[test]
    fn test_columns_portuguese_header() {
        let header = vec![
            Data::String("Código".into()),
            Data::String("ID".into()),
            Data::String("Descrição".into()),
            Data::String("Preço".into()),
        ];
        let columns = Columns::from_header(&header).expect("ヘッダー解析失敗");
        assert_eq!(columns.code, Some(0));
        assert_eq!(columns.id, Some(1));
        assert_eq!(columns.description, Some(2));
        assert_eq!(columns.price, Some(3));
        assert_eq!(columns.source, None);
    }
}
