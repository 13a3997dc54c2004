//! 列の対話式選択モジュール

use crate::error::{ReviewKeywordError, Result};
use dialoguer::Select;
use review_keyword_common::Table;

/// 列名を決定（指定があればそのまま、なければ対話選択）
///
/// 指定された列の存在確認は集計側で行う。
pub fn resolve_column(
    table: &Table,
    given: Option<String>,
    prompt: &str,
    hint: &[&str],
) -> Result<String> {
    if let Some(column) = given {
        return Ok(column);
    }

    if table.headers.is_empty() {
        return Err(ReviewKeywordError::SpreadsheetRead("ヘッダ行がありません".into()));
    }

    let default = guess_column(&table.headers, hint).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&table.headers)
        .default(default)
        .interact()
        .map_err(|e| ReviewKeywordError::Dialog(e.to_string()))?;

    Ok(table.headers[selection].clone())
}

/// 列名からそれらしい列を推測（部分一致、大文字小文字無視）
pub fn guess_column(headers: &[String], hint: &[&str]) -> Option<usize> {
    hint.iter().find_map(|h| {
        let h = h.to_lowercase();
        headers.iter().position(|name| name.to_lowercase().contains(&h))
    })
}

pub const TITLE_HINTS: &[&str] = &["title", "タイトル", "商品名", "name", "标题"];
pub const REVIEW_HINTS: &[&str] = &["review", "レビュー", "評価数", "rating", "评论"];
