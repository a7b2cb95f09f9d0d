//! カタログ（参照レコード集合）
//!
//! 検索対象の固定データ。実行中に追加・変更・削除されることはない。

use crate::error::{Error, Result};
use crate::types::CatalogEntry;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// NMコード形式（全体一致、大文字小文字無視、ASCII数字のみ）
    static ref CODE_PATTERN: Regex = Regex::new(r"(?i)^NM-[0-9]{3}-[0-9]{4}$").unwrap();
}

/// 文字列がNMコード形式か判定
pub fn looks_like_code(text: &str) -> bool {
    CODE_PATTERN.is_match(text)
}

/// 読み取り専用のカタログ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// 任意のエントリからカタログを構築（検証なし）
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// 外部から読み込んだエントリを検証してカタログを構築
    ///
    /// - idは空でなく一意
    /// - codeはNMコード形式
    ///
    /// idとcodeは前後の空白を除去して保持する。
    pub fn validated(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(entries.len());

        for (i, mut entry) in entries.into_iter().enumerate() {
            entry.id = entry.id.trim().to_string();
            entry.code = entry.code.trim().to_string();

            let id = entry.id.as_str();
            if id.is_empty() {
                return Err(Error::InvalidCatalog(format!("linha {}: id vazio", i + 1)));
            }
            if !seen.insert(id.to_string()) {
                return Err(Error::InvalidCatalog(format!("id duplicado: {}", id)));
            }
            if !looks_like_code(&entry.code) {
                return Err(Error::InvalidCatalog(format!(
                    "id {}: código fora do formato NM-###-#### ({})",
                    id, entry.code
                )));
            }

            cleaned.push(entry);
        }

        Ok(Self { entries: cleaned })
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::validated(entries)
    }

    /// 全エントリ（固定順）
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// コードで検索（前後空白除去、大文字小文字無視）
    pub fn find_by_code(&self, code: &str) -> Option<&CatalogEntry> {
        let needle = code.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.code.trim().to_lowercase() == needle)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 組み込みカタログ
    pub fn builtin() -> Self {
        Self::new(vec![
            entry(
                "1",
                "NM-001-2024",
                "Bomba centrífuga horizontal para água, vazão 50 m³/h, altura manométrica 30 mca, motor elétrico 7,5 CV",
                "Equipamentos Rotativos",
                "UN",
                Some(15750.00),
                "Planilha_Equipamentos_2024.xlsx",
            ),
            entry(
                "2",
                "NM-002-2024",
                "Válvula gaveta em aço carbono DN 100 PN 16, com volante manual",
                "Válvulas e Acessórios",
                "UN",
                Some(2850.00),
                "Planilha_Valvulas_2024.xlsx",
            ),
            entry(
                "3",
                "NM-003-2024",
                "Tubo de aço carbono ASTM A106 Gr.B, diâmetro 4\", espessura 6,02 mm, comprimento 6 metros",
                "Tubulação",
                "M",
                Some(285.50),
                "Planilha_Tubulacao_2024.xlsx",
            ),
            entry(
                "4",
                "NM-004-2024",
                "Flange de aço carbono ASTM A105, face realçada, DN 100 PN 16",
                "Tubulação",
                "UN",
                Some(425.00),
                "Planilha_Flanges_2024.xlsx",
            ),
            entry(
                "5",
                "NM-005-2024",
                "Motor elétrico trifásico 220/380V, 7,5 CV, 1750 RPM, grau de proteção IP55",
                "Equipamentos Elétricos",
                "UN",
                Some(3250.00),
                "Planilha_Motores_2024.xlsx",
            ),
            entry(
                "6",
                "NM-006-2024",
                "Instrumentação: Transmissor de pressão 4-20mA, range 0-10 bar, rosca 1/2\" NPT",
                "Instrumentação",
                "UN",
                Some(1850.00),
                "Planilha_Instrumentos_2024.xlsx",
            ),
        ])
    }
}

fn entry(
    id: &str,
    code: &str,
    description: &str,
    category: &str,
    unit: &str,
    price: Option<f64>,
    source: &str,
) -> CatalogEntry {
    CatalogEntry {
        id: id.into(),
        code: code.into(),
        description: description.into(),
        category: category.into(),
        unit: unit.into(),
        price,
        source: source.into(),
    }
}
