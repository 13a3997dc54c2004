use clap::{Parser, Subcommand};
use review_keyword_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "review-keyword")]
#[command(about = "商品タイトル×レビュー数のキーワード集計ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Excelファイルを集計
    Analyze {
        /// 入力Excelファイル (xlsx/xls/ods)
        #[arg(required = true)]
        input: PathBuf,

        /// コアキーワード（例: cat bed）
        #[arg(short = 'k', long)]
        core_keyword: Option<String>,

        /// タイトル列（省略時は設定値、なければ対話選択）
        #[arg(short, long)]
        title_column: Option<String>,

        /// レビュー数列（省略時は設定値、なければ対話選択）
        #[arg(short, long)]
        review_column: Option<String>,

        /// シート名（省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,

        /// カスタム語彙JSONファイル
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// 出力形式 (table/json/excel/all)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 表示する上位件数（0は全件、省略時は設定値）
        #[arg(long)]
        top: Option<usize>,
    },

    /// シートと列名を一覧表示
    Columns {
        /// 入力Excelファイル
        #[arg(required = true)]
        input: PathBuf,

        /// シート名（省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 語彙テーブルを表示
    Vocab {
        /// カテゴリを絞り込み (product/feature/material/target)
        #[arg(short, long)]
        category: Option<Category>,

        /// カスタム語彙JSONファイル
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// JSON形式で出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のタイトル列を設定
        #[arg(long)]
        set_title_column: Option<String>,

        /// 既定のレビュー数列を設定
        #[arg(long)]
        set_review_column: Option<String>,

        /// 既定の語彙JSONを設定
        #[arg(long)]
        set_vocab: Option<PathBuf>,

        /// 既定の表示件数を設定
        #[arg(long)]
        set_top: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Excel,
    All,
}

impl OutputFormat {
    pub fn writes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::All)
    }

    pub fn writes_excel(&self) -> bool {
        matches!(self, OutputFormat::Excel | OutputFormat::All)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            "all" | "both" => Ok(OutputFormat::All),
            _ => Err(format!("Unknown format: {}. Use table, json, excel, or all", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::All => write!(f, "all"),
        }
    }
}
