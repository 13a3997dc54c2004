//! 組み合わせキーワード
//!
//! 各カテゴリの1位同士を固定の組で掛け合わせる。
//! スコアは2語それぞれの独立した累計の和で、同一タイトルでの共起は問わない。

use crate::ranker::rank;
use crate::types::{AggregateResult, Category, CombinationEntry};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// 組み合わせるカテゴリの組（この順で生成）
pub const COMBINATION_PAIRS: [(Category, Category); 4] = [
    (Category::Product, Category::Feature),
    (Category::Product, Category::Material),
    (Category::Product, Category::Target),
    (Category::Feature, Category::Material),
];

/// 4カテゴリ分の集計結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResults {
    pub product: AggregateResult,
    pub feature: AggregateResult,
    pub material: AggregateResult,
    pub target: AggregateResult,
}

impl CategoryResults {
    pub fn get(&self, category: Category) -> &AggregateResult {
        match category {
            Category::Product => &self.product,
            Category::Feature => &self.feature,
            Category::Material => &self.material,
            Category::Target => &self.target,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut AggregateResult {
        match category {
            Category::Product => &mut self.product,
            Category::Feature => &mut self.feature,
            Category::Material => &mut self.material,
            Category::Target => &mut self.target,
        }
    }

    /// キーワードの累計（商品タイプ→機能→素材→対象の順で最初に見つかった値、なければ0）
    pub fn review_count_of(&self, keyword: &str) -> f64 {
        Category::ALL
            .iter()
            .find_map(|c| self.get(*c).get(keyword))
            .unwrap_or(0.0)
    }

    /// カテゴリの1位キーワード
    pub fn top_keyword(&self, category: Category) -> Option<String> {
        rank(self.get(category)).into_iter().next().map(|e| e.keyword)
    }
}

/// 組み合わせキーワードのスコアを算出（スコア降順）
///
/// どちらかのカテゴリに一致が1件もない組は出力しない。
pub fn score_combinations(
    results: &CategoryResults,
    vocabulary: &Vocabulary,
) -> Vec<CombinationEntry> {
    let mut combinations: Vec<CombinationEntry> = COMBINATION_PAIRS
        .iter()
        .filter_map(|(first, second)| {
            let keyword_a = results.top_keyword(*first)?;
            let keyword_b = results.top_keyword(*second)?;

            let combined_score =
                results.review_count_of(&keyword_a) + results.review_count_of(&keyword_b);
            let combined_translation = format!(
                "{}{}",
                vocabulary.translation(&keyword_a),
                vocabulary.translation(&keyword_b)
            );

            Some(CombinationEntry {
                keyword_a,
                keyword_b,
                combined_translation,
                combined_score,
            })
        })
        .collect();

    combinations.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::types::Table;

    fn results_for(table: &Table, vocabulary: &Vocabulary) -> CategoryResults {
        let mut results = CategoryResults::default();
        for category in Category::ALL {
            *results.get_mut(category) =
                aggregate(table, &vocabulary.keywords(category), "Title", "Reviews").unwrap();
        }
        results
    }

    #[test]
    fn test_score_is_independent_sum_without_cooccurrence() {
        // "cave" と "calming" は同じタイトルに現れない
        let table = Table::from_pairs(
            "Title",
            "Reviews",
            &[("Cat Cave", 10.0), ("Calming Bed", 4.0)],
        );
        let vocab = Vocabulary::builtin().with_core_keyword("pet bed").unwrap();
        let results = results_for(&table, &vocab);
        let combinations = score_combinations(&results, &vocab);

        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].keyword_pair(), "cave calming");
        assert_eq!(combinations[0].combined_score, 14.0);
        assert_eq!(combinations[0].combined_translation, "ドーム型落ち着く");
    }

    #[test]
    fn test_all_pairs_sorted_by_score() {
        let table = Table::from_pairs(
            "Title",
            "Reviews",
            &[
                ("Cozy Plush Cat Cave", 10.0),
                ("Soft Cat Bed Donut", 5.0),
                ("Waterproof Cat Mat for Kitten", 3.0),
            ],
        );
        let vocab = Vocabulary::builtin().with_core_keyword("cat bed").unwrap();
        let results = results_for(&table, &vocab);
        let combinations = score_combinations(&results, &vocab);

        let pairs: Vec<String> = combinations.iter().map(|c| c.keyword_pair()).collect();
        // plush(10) と cozy(10) は同数、一覧で先の plush が素材1位
        assert_eq!(
            pairs,
            vec!["cave plush", "cave waterproof", "cave kitten", "waterproof plush"]
        );
        assert_eq!(combinations[0].combined_score, 20.0);
        assert_eq!(combinations[1].combined_score, 13.0);
        assert_eq!(combinations[2].combined_score, 13.0);
        assert_eq!(combinations[3].combined_score, 13.0);
    }

    #[test]
    fn test_pairs_with_empty_category_are_omitted() {
        let table = Table::from_pairs("Title", "Reviews", &[("Soft Cave", 8.0)]);
        let vocab = Vocabulary::builtin().with_core_keyword("cat bed").unwrap();
        let results = results_for(&table, &vocab);

        assert!(results.feature.is_empty());
        assert!(results.target.is_empty());

        let combinations = score_combinations(&results, &vocab);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].keyword_pair(), "cave soft");
        assert_eq!(combinations[0].combined_score, 16.0);
    }

    #[test]
    fn test_no_matches_no_combinations() {
        let table = Table::from_pairs("Title", "Reviews", &[("Stainless Bowl", 8.0)]);
        let vocab = Vocabulary::builtin().with_core_keyword("cat bed").unwrap();
        let results = results_for(&table, &vocab);
        assert!(score_combinations(&results, &vocab).is_empty());
    }

    #[test]
    fn test_review_count_lookup_priority() {
        let table = Table::from_pairs("Title", "Reviews", &[("Calming Cushion", 6.0)]);
        let vocab = Vocabulary::builtin().with_core_keyword("calming").unwrap();
        let mut results = results_for(&table, &vocab);

        // 商品タイプ側の値が優先される
        *results.get_mut(Category::Product) =
            aggregate(&table, &["calming"], "Title", "Reviews").unwrap();
        results.feature = AggregateResult::from_entries(vec![crate::types::KeywordCount {
            keyword: "calming".to_string(),
            review_count: 100.0,
        }]);
        assert_eq!(results.review_count_of("calming"), 6.0);
        assert_eq!(results.review_count_of("hammock"), 0.0);
    }
}
