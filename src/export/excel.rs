//! Excel出力
//!
//! カテゴリ毎に1シート、組み合わせを5枚目のシートに書き出す。

use crate::error::{ReviewKeywordError, Result};
use review_keyword_common::{AnalysisReport, Category};
use rust_xlsxwriter::*;
use std::path::Path;

const COMBINATION_SHEET: &str = "組み合わせ";

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA))
}

fn count_format() -> Format {
    Format::new()
        .set_num_format("#,##0.##")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC))
}

fn text_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC))
}

/// ヘッダ行を書き込み、列幅を設定
fn write_header(worksheet: &mut Worksheet, headers: &[(&str, f64)], format: &Format) -> Result<()> {
    for (col, (label, width)) in headers.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *label, format)
            .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("ヘッダ書き込みエラー: {}", e)))?;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("ウィンドウ枠固定エラー: {}", e)))?;
    Ok(())
}

/// 解析結果からワークブックを組み立てる
pub fn build_workbook(report: &AnalysisReport) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = header_format();
    let text = text_format();
    let count = count_format();

    for category in Category::ALL {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(category.label())
            .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

        write_header(
            worksheet,
            &[("キーワード", 18.0), ("訳語", 16.0), ("説明", 36.0), ("レビュー数累計", 16.0)],
            &header,
        )?;

        for (i, keyword) in report.category(category).iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet
                .write_string_with_format(row, 0, &keyword.keyword, &text)
                .and_then(|ws| ws.write_string_with_format(row, 1, &keyword.translation, &text))
                .and_then(|ws| ws.write_string_with_format(row, 2, &keyword.description, &text))
                .and_then(|ws| ws.write_number_with_format(row, 3, keyword.review_count, &count))
                .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("値書き込みエラー: {}", e)))?;
        }
    }

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(COMBINATION_SHEET)
        .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    write_header(
        worksheet,
        &[("組み合わせ", 24.0), ("訳語", 24.0), ("スコア", 14.0)],
        &header,
    )?;

    for (i, combination) in report.combinations.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string_with_format(row, 0, combination.keyword_pair(), &text)
            .and_then(|ws| {
                ws.write_string_with_format(row, 1, &combination.combined_translation, &text)
            })
            .and_then(|ws| ws.write_number_with_format(row, 2, combination.combined_score, &count))
            .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("値書き込みエラー: {}", e)))?;
    }

    Ok(workbook)
}

pub fn generate_excel(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut workbook = build_workbook(report)?;
    workbook
        .save(output_path)
        .map_err(|e| ReviewKeywordError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}
