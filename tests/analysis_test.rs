//! Excel読み込みから集計までの統合テスト
//!
//! rust_xlsxwriterで作ったファイルをcalamineで読み戻して集計する

use review_keyword_common::{analyze, AnalysisRequest, Category, Vocabulary};
use review_keyword_rust::reader;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

/// タイトル・価格・レビュー数の3列のExcelを作成
fn write_listings(path: &Path, rows: &[(&str, Option<&str>)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Listings").unwrap();
    worksheet.write_string(0, 0, "Title").unwrap();
    worksheet.write_string(0, 1, "Price").unwrap();
    worksheet.write_string(0, 2, "Reviews").unwrap();

    for (i, (title, reviews)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, *title).unwrap();
        worksheet.write_number(row, 1, 19.99).unwrap();
        // Noneは空セルのまま
        if let Some(value) = reviews {
            match value.parse::<f64>() {
                Ok(n) => worksheet.write_number(row, 2, n).unwrap(),
                Err(_) => worksheet.write_string(row, 2, *value).unwrap(),
            };
        }
    }

    workbook.save(path).unwrap();
}

#[test]
fn test_read_table_from_xlsx() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(
        &path,
        &[("Cozy Plush Cat Cave", Some("10")), ("Soft Cat Bed Donut", Some("5"))],
    );

    let table = reader::read_table(&path, None).expect("読み込み失敗");
    assert_eq!(table.headers, vec!["Title", "Price", "Reviews"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_sheet_names() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(&path, &[("Cat Cave", Some("1"))]);

    let names = reader::sheet_names(&path).unwrap();
    assert_eq!(names, vec!["Listings"]);
}

#[test]
fn test_analyze_xlsx_scenario() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(
        &path,
        &[
            ("Cozy Plush Cat Cave", Some("10")),
            ("Soft Cat Bed Donut", Some("5")),
            ("Waterproof Cat Mat", Some("3")),
        ],
    );

    let table = reader::read_table(&path, Some("Listings")).unwrap();
    let request = AnalysisRequest::new("cat bed", "Title", "Reviews");
    let report = analyze(&table, &request, Vocabulary::builtin()).unwrap();

    let products: Vec<(&str, f64)> = report
        .category(Category::Product)
        .iter()
        .map(|k| (k.keyword.as_str(), k.review_count))
        .collect();
    assert_eq!(
        products,
        vec![("cave", 10.0), ("cat bed", 5.0), ("donut", 5.0), ("mat", 3.0)]
    );
    assert_eq!(report.summary.total_rows, 3);
    assert_eq!(report.summary.total_reviews, 18.0);
}

#[test]
fn test_blank_and_text_review_counts_are_zero() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(
        &path,
        &[
            ("Calming Donut Bed", None),
            ("Calming Cave", Some("many")),
            ("Calming Mat", Some("4")),
        ],
    );

    let table = reader::read_table(&path, None).unwrap();
    let request = AnalysisRequest::new("dog bed", "Title", "Reviews");
    let report = analyze(&table, &request, Vocabulary::builtin()).unwrap();

    let products: Vec<(&str, f64)> = report
        .category(Category::Product)
        .iter()
        .map(|k| (k.keyword.as_str(), k.review_count))
        .collect();
    assert_eq!(products, vec![("mat", 4.0), ("cave", 0.0), ("donut", 0.0)]);
    assert_eq!(report.category(Category::Feature)[0].review_count, 4.0);
    assert_eq!(report.summary.non_numeric_rows, 2);
}

#[test]
fn test_unknown_column_after_reading() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(&path, &[("Cat Cave", Some("1"))]);

    let table = reader::read_table(&path, None).unwrap();
    let request = AnalysisRequest::new("cat bed", "商品名", "Reviews");
    let err = analyze(&table, &request, Vocabulary::builtin()).unwrap_err();

    let display = format!("{}", err);
    assert!(display.contains("商品名"));
    assert!(display.contains("Title, Price, Reviews"));
}

#[test]
fn test_custom_vocabulary_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.xlsx");
    write_listings(
        &path,
        &[("Dog Hammock for Senior Dogs", Some("7")), ("Cat Hammock", Some("2"))],
    );

    let vocab_path = dir.path().join("vocab.json");
    std::fs::write(
        &vocab_path,
        r#"{
            "product": [{"keyword": "hammock", "translation": "ハンモック"}],
            "target": [{"keyword": "senior", "translation": "シニア"}]
        }"#,
    )
    .unwrap();
    let vocabulary = Vocabulary::from_file(&vocab_path).unwrap();

    let table = reader::read_table(&path, None).unwrap();
    let request = AnalysisRequest::new("pet hammock", "Title", "Reviews");
    let report = analyze(&table, &request, &vocabulary).unwrap();

    assert_eq!(report.category(Category::Product)[0].keyword, "hammock");
    assert_eq!(report.category(Category::Product)[0].review_count, 9.0);
    assert_eq!(report.combinations.len(), 1);
    assert_eq!(report.combinations[0].keyword_pair(), "hammock senior");
    assert_eq!(report.combinations[0].combined_translation, "ハンモックシニア");
    assert_eq!(report.combinations[0].combined_score, 16.0);
}
