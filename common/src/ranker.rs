//! ランキング
//!
//! 集計結果をレビュー数の降順に並べる。同数はキーワード一覧の並び順を保つ。

use crate::types::{AggregateResult, KeywordCount, RankedKeyword};
use crate::vocabulary::Vocabulary;

/// レビュー数の降順に並べる（安定ソート）
pub fn rank(result: &AggregateResult) -> Vec<KeywordCount> {
    let mut ranked = result.entries().to_vec();
    ranked.sort_by(|a, b| b.review_count.total_cmp(&a.review_count));
    ranked
}

/// ランキングに訳語・説明を付与
pub fn rank_with_vocabulary(
    result: &AggregateResult,
    vocabulary: &Vocabulary,
) -> Vec<RankedKeyword> {
    rank(result)
        .into_iter()
        .map(|entry| {
            let (translation, description) = vocabulary
                .lookup(&entry.keyword)
                .map(|e| (e.translation.clone(), e.description.clone()))
                .unwrap_or_default();
            RankedKeyword {
                keyword: entry.keyword,
                translation,
                description,
                review_count: entry.review_count,
            }
        })
        .collect()
}
