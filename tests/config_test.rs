//! 設定ファイルの読み書きテスト

use sookshma::config::Config;
use sookshma::error::SookshmaError;
use sookshma_common::Language;
use tempfile::tempdir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.language, Language::En);
    assert!(config.seed.is_none());
    assert!(config.simulate_delay);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        language: Language::Te,
        seed: Some(42),
        simulate_delay: false,
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

/// 欠けた項目は既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "language": "te" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.language, Language::Te);
    assert!(config.seed.is_none());
    assert!(config.simulate_delay);
}

#[test]
fn test_broken_file_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ language: ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, SookshmaError::JsonParse(_)));
}
