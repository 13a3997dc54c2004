//! Review Keyword Common Library
//!
//! 商品タイトル×レビュー数のキーワード集計（CLIから利用される純粋なロジック）

pub mod types;
pub mod error;
pub mod vocabulary;
pub mod aggregator;
pub mod ranker;
pub mod combination;
pub mod analysis;

pub use types::{
    AggregateResult, AnalysisReport, Category, CategoryReport, Cell, CombinationEntry,
    KeywordCount, KeywordEntry, RankedKeyword, RunSummary, Table, format_count,
};
pub use error::{Error, Result};
pub use vocabulary::{Vocabulary, VocabularyFile, VocabularyItem};
pub use aggregator::aggregate;
pub use ranker::{rank, rank_with_vocabulary};
pub use combination::{score_combinations, CategoryResults, COMBINATION_PAIRS};
pub use analysis::{analyze, aggregate_categories, summarize, AnalysisRequest};
