//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid start position: {0} (expected 0.0 <= value < 1.0)")]
    InvalidStartPosition(f64),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid height: {0}px (must be at least 1)")]
    InvalidHeight(u32),

    #[error("Timeline error: {0}")]
    Timeline(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_height() {
        assert_eq!(format!("{}", Error::InvalidHeight(0)), "Invalid height: 0px (must be at least 1)");
    }

    #[test]
    fn test_error_display_start_position() {
        let display = format!("{}", Error::InvalidStartPosition(1.5));
        assert!(display.contains("1.5"));
        assert!(display.contains("start position"));
    }

    #[test]
    fn test_error_display_color() {
        let display = format!("{}", Error::InvalidColor("red;}".to_string()));
        assert_eq!(display, "Invalid color: \"red;}\"");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Timeline("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Timeline"));
        assert!(debug.contains("テスト"));
    }
}
