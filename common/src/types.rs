//! 集計の型定義
//!
//! CLIと共有される型:
//! - Table / Cell: 読み込んだ表データ
//! - AggregateResult: キーワード毎のレビュー数累計
//! - AnalysisReport: 最終出力（4カテゴリ＋組み合わせ）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 表のセル値
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// レビュー数として解釈（数値化できない値は0）
    pub fn as_review_count(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Bool(true) => 1.0,
            Cell::Bool(false) | Cell::Empty => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }

    /// 数値として解釈できるか
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Number(n) => n.is_finite(),
            Cell::Text(s) => s.trim().parse::<f64>().map(|n| n.is_finite()).unwrap_or(false),
            Cell::Bool(_) => true,
            Cell::Empty => false,
        }
    }

    /// タイトル文字列として取得（数値は丸めずに文字列化）
    pub fn as_title(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// 表データ（1行目をヘッダとして扱う）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// (タイトル, レビュー数) の2列だけの表を作る
    pub fn from_pairs<S: AsRef<str>>(
        title_header: &str,
        review_header: &str,
        pairs: &[(S, f64)],
    ) -> Self {
        let rows = pairs
            .iter()
            .map(|(title, count)| vec![Cell::from(title.as_ref()), Cell::Number(*count)])
            .collect();
        Self::new(vec![title_header.to_string(), review_header.to_string()], rows)
    }

    /// 列名から列番号を取得
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::ColumnNotFound {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// 指定セルを取得（行が短い場合は空セル）
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// キーワードカテゴリ（並び順が検索の優先順位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Product,
    Feature,
    Material,
    Target,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Feature,
        Category::Material,
        Category::Target,
    ];

    /// 表示名
    pub fn label(&self) -> &'static str {
        match self {
            Category::Product => "商品タイプ",
            Category::Feature => "機能特性",
            Category::Material => "素材・質感",
            Category::Target => "対象",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Product => "product",
            Category::Feature => "feature",
            Category::Material => "material",
            Category::Target => "target",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" | "type" | "商品タイプ" => Ok(Category::Product),
            "feature" | "機能" | "機能特性" => Ok(Category::Feature),
            "material" | "素材" => Ok(Category::Material),
            "target" | "対象" => Ok(Category::Target),
            _ => Err(format!(
                "Unknown category: {}. Use product, feature, material, or target",
                s
            )),
        }
    }
}

/// 語彙エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub category: Category,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub description: String,
}

/// キーワードとレビュー数累計
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub review_count: f64,
}

/// 1カテゴリ分の集計結果
///
/// 1件以上ヒットしたキーワードのみ保持し、並びは語彙の並び順。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    entries: Vec<KeywordCount>,
}

impl AggregateResult {
    /// 語彙順に並んだエントリから作成
    pub(crate) fn from_entries(entries: Vec<KeywordCount>) -> Self {
        Self { entries }
    }

    /// キーワードの累計を取得（大文字小文字を区別しない）
    pub fn get(&self, keyword: &str) -> Option<f64> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.keyword.to_lowercase() == needle)
            .map(|e| e.review_count)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ランキング行（表示用に訳語・説明を付与）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeyword {
    pub keyword: String,
    pub translation: String,
    pub description: String,
    pub review_count: f64,
}

/// 組み合わせキーワード
///
/// スコアは各キーワードの独立した累計の和（同一タイトル内の共起数ではない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationEntry {
    pub keyword_a: String,
    pub keyword_b: String,
    pub combined_translation: String,
    pub combined_score: f64,
}

impl CombinationEntry {
    /// "a b" 形式の組み合わせ表記
    pub fn keyword_pair(&self) -> String {
        format!("{} {}", self.keyword_a, self.keyword_b)
    }
}

/// カテゴリ毎のランキング
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub category: Category,
    pub keywords: Vec<RankedKeyword>,
}

/// 入力データの概要
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_rows: usize,
    /// レビュー数が数値でなかった行（0として扱った）
    pub non_numeric_rows: usize,
    pub total_reviews: f64,
}

/// 解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub core_keyword: String,
    pub title_column: String,
    pub review_column: String,
    pub summary: RunSummary,
    pub categories: Vec<CategoryReport>,
    pub combinations: Vec<CombinationEntry>,
}

impl AnalysisReport {
    /// カテゴリのランキングを取得
    pub fn category(&self, category: Category) -> &[RankedKeyword] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.keywords.as_slice())
            .unwrap_or(&[])
    }
}

/// レビュー数の表示（整数値は小数点なし）
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_review_count_coercion() {
        assert_eq!(Cell::Number(12.0).as_review_count(), 12.0);
        assert_eq!(Cell::from("34").as_review_count(), 34.0);
        assert_eq!(Cell::from(" 5.5 ").as_review_count(), 5.5);
        assert_eq!(Cell::from("").as_review_count(), 0.0);
        assert_eq!(Cell::from("n/a").as_review_count(), 0.0);
        assert_eq!(Cell::from("1,234").as_review_count(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).as_review_count(), 0.0);
        assert_eq!(Cell::Empty.as_review_count(), 0.0);
        assert_eq!(Cell::Bool(true).as_review_count(), 1.0);
    }

    #[test]
    fn test_cell_is_numeric() {
        assert!(Cell::Number(1.0).is_numeric());
        assert!(Cell::from("7").is_numeric());
        assert!(!Cell::from("abc").is_numeric());
        assert!(!Cell::Empty.is_numeric());
        assert!(!Cell::from("NaN").is_numeric());
    }

    #[test]
    fn test_cell_as_title() {
        assert_eq!(Cell::from("Cat Cave").as_title(), "Cat Cave");
        assert_eq!(Cell::Number(42.0).as_title(), "42");
        assert_eq!(Cell::Empty.as_title(), "");
    }

    #[test]
    fn test_fractional_title_keeps_all_digits() {
        assert_eq!(Cell::Number(12.34567).as_title(), "12.34567");
        assert_eq!(Cell::Number(-0.5).as_title(), "-0.5");
        assert_eq!(Cell::Bool(true).as_title(), "true");
    }

    #[test]
    fn test_table_column_index() {
        let table = Table::from_pairs("Title", "Reviews", &[("a", 1.0)]);
        assert_eq!(table.column_index("Reviews").unwrap(), 1);

        let err = table.column_index("Missing").unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { ref column, .. } if column == "Missing"));
    }

    #[test]
    fn test_table_short_row_reads_empty() {
        let table = Table::new(
            vec!["Title".to_string(), "Reviews".to_string()],
            vec![vec![Cell::from("only title")]],
        );
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Product".parse::<Category>().unwrap(), Category::Product);
        assert_eq!("素材".parse::<Category>().unwrap(), Category::Material);
        assert!("color".parse::<Category>().is_err());
    }

    #[test]
    fn test_aggregate_result_lookup_ignores_case() {
        let result = AggregateResult::from_entries(vec![
            KeywordCount { keyword: "cave".to_string(), review_count: 10.0 },
            KeywordCount { keyword: "Mat".to_string(), review_count: 5.0 },
        ]);

        let keywords: Vec<&str> = result.keywords().collect();
        assert_eq!(keywords, vec!["cave", "Mat"]);
        assert_eq!(result.get("MAT"), Some(5.0));
        assert_eq!(result.get("tent"), None);
        assert!(result.contains("Cave"));
    }

    #[test]
    fn test_combination_keyword_pair() {
        let entry = CombinationEntry {
            keyword_a: "cave".to_string(),
            keyword_b: "calming".to_string(),
            combined_translation: "ドームベッド落ち着く".to_string(),
            combined_score: 12.0,
        };
        assert_eq!(entry.keyword_pair(), "cave calming");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10.0), "10");
        assert_eq!(format_count(2.5), "2.50");
        assert_eq!(format_count(0.0), "0");
    }
}
