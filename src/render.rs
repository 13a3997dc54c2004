//! 端末向けの表出力

use review_keyword_common::{format_count, AnalysisReport, Category, Vocabulary};

/// 表示幅（全角文字は2）
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if (c as u32) >= 0x1100 { 2 } else { 1 })
        .sum()
}

fn pad(s: &str, width: usize) -> String {
    let w = display_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// 列幅を揃えた表を文字列化
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(display_width(cell));
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(rule.iter().map(|s| s.as_str()).collect()));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(|s| s.as_str()).collect()));
        out.push('\n');
    }
    out
}

fn limit<T>(items: &[T], top: usize) -> &[T] {
    if top == 0 || items.len() <= top {
        items
    } else {
        &items[..top]
    }
}

/// 解析結果を5つの表として文字列化
pub fn render_report(report: &AnalysisReport, top: usize) -> String {
    let mut out = String::new();

    for (i, category) in Category::ALL.iter().enumerate() {
        out.push_str(&format!("\n{}. {}キーワード統計\n", i + 1, category.label()));

        let keywords = report.category(*category);
        if keywords.is_empty() {
            out.push_str("  (一致なし)\n");
            continue;
        }

        let rows: Vec<Vec<String>> = limit(keywords, top)
            .iter()
            .map(|k| {
                vec![
                    k.keyword.clone(),
                    k.translation.clone(),
                    k.description.clone(),
                    format_count(k.review_count),
                ]
            })
            .collect();
        out.push_str(&format_table(&["キーワード", "訳語", "説明", "レビュー数累計"], &rows));
    }

    out.push_str("\n5. 組み合わせキーワード\n");
    if report.combinations.is_empty() {
        out.push_str("  (組み合わせなし)\n");
    } else {
        let rows: Vec<Vec<String>> = report
            .combinations
            .iter()
            .map(|c| {
                vec![
                    c.keyword_pair(),
                    c.combined_translation.clone(),
                    format_count(c.combined_score),
                ]
            })
            .collect();
        out.push_str(&format_table(&["組み合わせ", "訳語", "スコア"], &rows));
    }

    out
}

/// 入力概要
pub fn render_summary(report: &AnalysisReport) -> String {
    let matched: usize = report.categories.iter().map(|c| c.keywords.len()).sum();
    let per_category: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c.label(), report.category(*c).len()))
        .collect();
    let mut out = format!(
        "コアキーワード: {}\n列: {} / {}\n行数: {}  レビュー数合計: {}\n一致キーワード: {}（{}）",
        report.core_keyword,
        report.title_column,
        report.review_column,
        report.summary.total_rows,
        format_count(report.summary.total_reviews),
        matched,
        per_category.join(" / "),
    );
    if report.summary.non_numeric_rows > 0 {
        out.push_str(&format!(
            "\n⚠ レビュー数が数値でない行: {}（0として集計）",
            report.summary.non_numeric_rows
        ));
    }
    out
}

/// 語彙テーブルを文字列化
pub fn render_vocabulary(vocabulary: &Vocabulary, only: Option<Category>) -> String {
    let mut out = String::new();
    for category in Category::ALL.iter().filter(|c| only.map_or(true, |o| o == **c)) {
        out.push_str(&format!("\n[{}] ({})\n", category.label(), category.key()));
        let rows: Vec<Vec<String>> = vocabulary
            .entries(*category)
            .map(|e| vec![e.keyword.clone(), e.translation.clone(), e.description.clone()])
            .collect();
        out.push_str(&format_table(&["キーワード", "訳語", "説明"], &rows));
    }
    out
}
