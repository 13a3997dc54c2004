//! キーワード集計
//!
//! タイトルにキーワードが含まれる（大文字小文字を区別しない部分一致）行の
//! レビュー数を合計する。1つのタイトルが複数のキーワードに一致した場合、
//! それぞれにレビュー数を丸ごと加算する。

use crate::error::Result;
use crate::types::{AggregateResult, KeywordCount, Table};
use std::collections::HashSet;

/// キーワード一覧についてレビュー数を集計する
///
/// # Arguments
/// * `table` - 入力表
/// * `keywords` - キーワード一覧（並び順が同数時の順位になる）
/// * `title_column` - タイトル列名
/// * `review_column` - レビュー数列名
///
/// 列が存在しない場合は `Error::ColumnNotFound`。
/// キーワードが空、または表が空の場合は空の結果を返す。
pub fn aggregate<S: AsRef<str>>(
    table: &Table,
    keywords: &[S],
    title_column: &str,
    review_column: &str,
) -> Result<AggregateResult> {
    let title_idx = table.column_index(title_column)?;
    let review_idx = table.column_index(review_column)?;

    // 同じ綴りは最初の1つだけを対象にする
    let mut seen = HashSet::new();
    let needles: Vec<(&str, String)> = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| seen.insert(k.to_lowercase()))
        .map(|k| (k, k.to_lowercase()))
        .collect();

    let mut sums: Vec<Option<f64>> = vec![None; needles.len()];

    for row in 0..table.len() {
        let title = table.cell(row, title_idx).as_title().to_lowercase();
        let review_count = table.cell(row, review_idx).as_review_count();

        for (slot, (_, needle)) in sums.iter_mut().zip(&needles) {
            if title.contains(needle.as_str()) {
                *slot = Some(slot.unwrap_or(0.0) + review_count);
            }
        }
    }

    let entries = needles
        .iter()
        .zip(sums)
        .filter_map(|((keyword, _), sum)| {
            sum.map(|review_count| KeywordCount {
                keyword: keyword.to_string(),
                review_count,
            })
        })
        .collect();

    Ok(AggregateResult::from_entries(entries))
}
