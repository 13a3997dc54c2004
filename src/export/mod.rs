pub mod excel;
pub mod json;

use crate::cli::OutputFormat;
use crate::error::Result;
use review_keyword_common::AnalysisReport;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.with_extension(extension)
    }
}

fn output_paths_for_all(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 入力ファイル名から出力名を作る（例: listings.xlsx → listings_keywords）
pub fn default_title(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());
    format!("{}_keywords", stem)
}

/// 解析結果をファイルに出力し、書き出したパスを返す
pub fn export_report(
    report: &AnalysisReport,
    format: &OutputFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let (json_path, excel_path) = match format {
        OutputFormat::All => output_paths_for_all(output, title),
        _ => (
            output_path_for_format(output, title, "json"),
            output_path_for_format(output, title, "xlsx"),
        ),
    };

    let mut written = Vec::new();

    if format.writes_json() {
        json::write_json(report, &json_path)?;
        println!("✔ JSON出力: {}", json_path.display());
        written.push(json_path);
    }

    if format.writes_excel() {
        println!("- Excelを生成中...");
        excel::generate_excel(report, &excel_path)?;
        println!("✔ Excel出力: {}", excel_path.display());
        written.push(excel_path);
    }

    Ok(written)
}
