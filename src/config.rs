use crate::error::{ReviewKeywordError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 既定のタイトル列名
    pub title_column: Option<String>,
    /// 既定のレビュー数列名
    pub review_column: Option<String>,
    /// カスタム語彙JSON
    pub vocabulary_path: Option<PathBuf>,
    /// 端末表示の最大行数（0は全件）
    pub top: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewKeywordError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("review-keyword").join("config.json"))
    }

    /// 引数指定を優先し、なければ設定値
    pub fn resolve_title_column(&self, arg: Option<String>) -> Option<String> {
        arg.or_else(|| self.title_column.clone())
    }

    pub fn resolve_review_column(&self, arg: Option<String>) -> Option<String> {
        arg.or_else(|| self.review_column.clone())
    }

    pub fn resolve_vocabulary_path(&self, arg: Option<PathBuf>) -> Option<PathBuf> {
        arg.or_else(|| self.vocabulary_path.clone())
    }
}
