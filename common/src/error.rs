//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file type: {mime_type} (please upload an image)")]
    UnsupportedFileType { mime_type: String },

    #[error("File too large: {size_bytes} bytes (limit {limit_bytes} bytes)")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// アップロード拒否（画面通知で済む回復可能エラー）かどうか
    pub fn is_upload_rejection(&self) -> bool {
        matches!(self, Error::UnsupportedFileType { .. } | Error::FileTooLarge { .. })
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_type() {
        let error = Error::UnsupportedFileType { mime_type: "application/pdf".to_string() };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported file type"));
        assert!(display.contains("application/pdf"));
    }

    #[test]
    fn test_error_display_too_large() {
        let error = Error::FileTooLarge { size_bytes: 15_728_640, limit_bytes: 10_485_760 };
        let display = format!("{}", error);
        assert!(display.contains("15728640"));
        assert!(display.contains("10485760"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("unknown language".to_string());
        assert_eq!(format!("{}", error), "Config error: unknown language");
    }

    #[test]
    fn test_is_upload_rejection() {
        assert!(Error::UnsupportedFileType { mime_type: "text/plain".into() }.is_upload_rejection());
        assert!(Error::FileTooLarge { size_bytes: 2, limit_bytes: 1 }.is_upload_rejection());
        assert!(!Error::Config("x".into()).is_upload_rejection());
    }
}
