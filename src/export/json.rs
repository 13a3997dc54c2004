//! JSON出力

use crate::error::Result;
use review_keyword_common::AnalysisReport;
use serde::Serialize;
use std::path::Path;

/// 出力ファイルの構造（生成日時付き）
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

pub fn write_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let payload = JsonReport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        report,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
