use crate::error::{NmSearchError, Result};
use nm_search_common::SearchMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でカタログファイルを指定
pub const CATALOG_ENV: &str = "NM_SEARCH_CATALOG";

/// 画面で選べる表示件数
pub const ALLOWED_LIMITS: [usize; 4] = [5, 10, 15, 20];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_limit: usize,
    pub default_mode: SearchMode,
    /// 検索前の擬似待ち時間（ミリ秒）
    pub search_delay_ms: u64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_mode: SearchMode::Semantic,
            search_delay_ms: 1000,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            config.sanitize();
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NmSearchError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("nm-search").join("config.json"))
    }

    /// 手編集された表示件数が選択肢外なら既定値に戻す
    fn sanitize(&mut self) {
        if validate_limit(self.default_limit).is_err() {
            let fallback = Self::default().default_limit;
            eprintln!(
                "⚠ default_limit inválido no arquivo de configuração ({}), usando {}",
                self.default_limit, fallback
            );
            self.default_limit = fallback;
        }
    }

    /// カタログパス（CLI引数 > 環境変数 > 設定ファイル）
    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        self.resolve_catalog_path_with(cli_override, |key| std::env::var(key).ok())
    }

    /// 環境変数の参照先を差し替えられる版
    pub fn resolve_catalog_path_with<F>(&self, cli_override: Option<&Path>, env: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        if let Some(path) = env(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path.trim()));
            }
        }

        self.catalog_path.clone()
    }

    pub fn set_default_limit(&mut self, limit: usize) -> Result<()> {
        validate_limit(limit)?;
        self.default_limit = limit;
        Ok(())
    }
}

/// 表示件数が選択肢に含まれるか
pub fn validate_limit(limit: usize) -> Result<usize> {
    if ALLOWED_LIMITS.contains(&limit) {
        Ok(limit)
    } else {
        Err(NmSearchError::InvalidLimit(limit))
    }
}
