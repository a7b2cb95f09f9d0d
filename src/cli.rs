use clap::{Args, Parser, Subcommand};
use crate::export::ExportFormat;
use nm_search_common::SearchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nm-search")]
#[command(about = "Busca inteligente de referências técnicas (códigos NM)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 乱数シード（再現用）
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// カタログファイル (.json/.xlsx)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを検索
    Search(SearchArgs),

    /// カタログ一覧を表示
    Catalog {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の表示件数
        #[arg(long, value_parser = parse_limit)]
        set_limit: Option<usize>,

        /// 既定の検索モード
        #[arg(long)]
        set_mode: Option<SearchMode>,

        /// 検索前の待ち時間（ミリ秒）
        #[arg(long)]
        set_delay: Option<u64>,

        /// 既定のカタログファイル
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 初期設定に戻す
        #[arg(long)]
        reset: bool,
    },
}

/// 検索コマンドの引数
#[derive(Args)]
pub struct SearchArgs {
    /// 検索語（説明文またはNMコード）
    #[arg(required = true)]
    pub query: String,

    /// 検索モード (semantic/hybrid)
    #[arg(short, long)]
    pub mode: Option<SearchMode>,

    /// 表示件数 (5/10/15/20)
    #[arg(short = 'n', long, value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// 選択するid（カンマ区切り）
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["select_all", "interactive"])]
    pub select: Vec<String>,

    /// 全件選択
    #[arg(long, conflicts_with = "interactive")]
    pub select_all: bool,

    /// 対話的に選択
    #[arg(short, long)]
    pub interactive: bool,

    /// 選択から外すid（カンマ区切り）
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// 選択結果をエクスポート (clipboard/csv/excel)
    #[arg(short, long)]
    pub export: Option<ExportFormat>,

    /// JSONで出力
    #[arg(long)]
    pub json: bool,

    /// 待ち時間を省略
    #[arg(long)]
    pub no_delay: bool,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s
        .parse()
        .map_err(|_| format!("Invalid limit: {}. Use 5, 10, 15, or 20", s))?;
    crate::config::validate_limit(limit).map_err(|e| e.to_string())
}
