//! スプレッドシート読み込み
//!
//! calamineでxlsx/xlsm/xls/odsを開き、1行目をヘッダとして表に変換する。

use crate::error::{ReviewKeywordError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use review_keyword_common::{Cell, Table};
use std::path::Path;

const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// シート名一覧を取得
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    ensure_readable(path)?;
    let workbook = open_workbook_auto(path)
        .map_err(|e| ReviewKeywordError::SpreadsheetRead(e.to_string()))?;
    Ok(workbook.sheet_names())
}

/// シートを表として読み込む（シート省略時は先頭）
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    ensure_readable(path)?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ReviewKeywordError::SpreadsheetRead(e.to_string()))?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => {
            if !names.iter().any(|n| n == name) {
                return Err(ReviewKeywordError::SheetNotFound {
                    sheet: name.to_string(),
                    available: names,
                });
            }
            name.to_string()
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| ReviewKeywordError::SpreadsheetRead("シートがありません".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ReviewKeywordError::SpreadsheetRead(format!("{}: {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_names(header_row),
        None => return Ok(Table::default()),
    };

    let rows = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    Ok(Table::new(headers, rows))
}

fn ensure_readable(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReviewKeywordError::FileNotFound(path.display().to_string()));
    }
    if !is_supported_extension(path) {
        return Err(ReviewKeywordError::SpreadsheetRead(format!(
            "未対応の形式です: {}（対応: {}）",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}

/// ヘッダ行を列名に変換（空欄は「列N」）
fn header_names(row: &[Data]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(i, data)| {
            let name = to_cell(data).as_title().trim().to_string();
            if name.is_empty() {
                format!("列{}", i + 1)
            } else {
                name
            }
        })
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
