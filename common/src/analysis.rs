//! 解析パイプライン
//!
//! コアキーワード検証 → 4カテゴリ集計 → ランキング → 組み合わせスコア。
//! 実行毎に新しい状態を作り、呼び出し間で何も保持しない。

use crate::aggregator::aggregate;
use crate::combination::{score_combinations, CategoryResults};
use crate::error::Result;
use crate::ranker::rank_with_vocabulary;
use crate::types::{AnalysisReport, Category, CategoryReport, RunSummary, Table};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// 解析の入力パラメータ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub core_keyword: String,
    pub title_column: String,
    pub review_column: String,
}

impl AnalysisRequest {
    pub fn new(core_keyword: &str, title_column: &str, review_column: &str) -> Self {
        Self {
            core_keyword: core_keyword.to_string(),
            title_column: title_column.to_string(),
            review_column: review_column.to_string(),
        }
    }
}

/// 表を解析する
///
/// コアキーワードが空なら集計前に `Error::MissingCoreKeyword`、
/// 列が存在しなければ `Error::ColumnNotFound` を返す。
pub fn analyze(
    table: &Table,
    request: &AnalysisRequest,
    vocabulary: &Vocabulary,
) -> Result<AnalysisReport> {
    let run_vocabulary = vocabulary.with_core_keyword(&request.core_keyword)?;
    let results = aggregate_categories(table, request, &run_vocabulary)?;

    let categories = Category::ALL
        .iter()
        .map(|category| CategoryReport {
            category: *category,
            keywords: rank_with_vocabulary(results.get(*category), &run_vocabulary),
        })
        .collect();

    let combinations = score_combinations(&results, &run_vocabulary);

    Ok(AnalysisReport {
        core_keyword: request.core_keyword.trim().to_string(),
        title_column: request.title_column.clone(),
        review_column: request.review_column.clone(),
        summary: summarize(table, &request.review_column)?,
        categories,
        combinations,
    })
}

/// 4カテゴリそれぞれを集計
pub fn aggregate_categories(
    table: &Table,
    request: &AnalysisRequest,
    vocabulary: &Vocabulary,
) -> Result<CategoryResults> {
    let mut results = CategoryResults::default();
    for category in Category::ALL {
        let keywords = vocabulary.keywords(category);
        *results.get_mut(category) =
            aggregate(table, &keywords, &request.title_column, &request.review_column)?;
    }
    Ok(results)
}

/// 入力データの概要
pub fn summarize(table: &Table, review_column: &str) -> Result<RunSummary> {
    let review_idx = table.column_index(review_column)?;

    let mut summary = RunSummary {
        total_rows: table.len(),
        ..Default::default()
    };
    for row in 0..table.len() {
        let cell = table.cell(row, review_idx);
        if !cell.is_numeric() {
            summary.non_numeric_rows += 1;
        }
        summary.total_reviews += cell.as_review_count();
    }

    Ok(summary)
}
