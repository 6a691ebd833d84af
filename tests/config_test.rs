//! 設定ファイルテスト
//!
//! 保存・読み込みとデフォルト値の動作を検証

use capascope::config::{Config, DEFAULT_BACKEND_URL};
use tempfile::tempdir;

/// 設定ファイルがない場合はデフォルト値
#[test]
fn test_config_missing_file_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
}

/// 保存と読み込みの往復
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        backend_url: "https://analyzer.example.com".to_string(),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.backend_url, "https://analyzer.example.com");
}

/// 壊れた設定ファイルはエラー
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").expect("書き込み失敗");

    assert!(Config::load_from(&path).is_err());
}
