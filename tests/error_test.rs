//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use sookshma::error::SookshmaError;
use sookshma::intake;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = intake::read_upload(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result.unwrap_err(), SookshmaError::FileNotFound(_)));
}

/// ディレクトリを渡した場合
#[test]
fn test_read_directory_is_not_a_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = intake::read_upload(dir.path());
    assert!(matches!(result.unwrap_err(), SookshmaError::FileNotFound(_)));
}

/// SookshmaErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SookshmaError::Config("bad config".to_string()),
        SookshmaError::FileNotFound("produce.jpg".to_string()),
        SookshmaError::NoValidUploads(2),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_no_valid_uploads_message() {
    let display = format!("{}", SookshmaError::NoValidUploads(3));
    assert!(display.contains("3 rejected"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SookshmaError = io_err.into();

    assert!(matches!(err, SookshmaError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SookshmaError = json_err.into();

    assert!(matches!(err, SookshmaError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = sookshma_common::Error::FileTooLarge {
        size_bytes: 15 * 1024 * 1024,
        limit_bytes: sookshma_common::MAX_UPLOAD_BYTES,
    };
    let err: SookshmaError = common_err.into();

    assert!(matches!(err, SookshmaError::Common(_)));
    assert!(format!("{}", err).starts_with("File too large"));
}

/// アップロード拒否の判定
#[test]
fn test_upload_rejection_classification() {
    let rejected: SookshmaError = sookshma_common::Error::UnsupportedFileType {
        mime_type: "text/plain".to_string(),
    }
    .into();
    assert!(rejected.is_upload_rejection());

    let config: SookshmaError = sookshma_common::Error::Config("x".to_string()).into();
    assert!(!config.is_upload_rejection());
    assert!(!SookshmaError::FileNotFound("a.jpg".to_string()).is_upload_rejection());
}
