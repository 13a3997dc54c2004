//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("コアキーワードを入力してください")]
    MissingCoreKeyword,

    #[error("列が見つかりません: {column}（利用可能な列: {}）", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("語彙定義が不正: {0}")]
    InvalidVocabulary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_core_keyword() {
        let display = format!("{}", Error::MissingCoreKeyword);
        assert!(display.contains("コアキーワード"));
    }

    #[test]
    fn test_error_display_column_not_found() {
        let error = Error::ColumnNotFound {
            column: "Title".to_string(),
            available: vec!["商品名".to_string(), "Reviews".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("Title"));
        assert!(display.contains("商品名, Reviews"));
    }

    #[test]
    fn test_error_display_invalid_vocabulary() {
        let error = Error::InvalidVocabulary("空のキーワード".to_string());
        assert_eq!(format!("{}", error), "語彙定義が不正: 空のキーワード");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{}", error).contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
