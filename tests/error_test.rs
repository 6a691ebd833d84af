//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use capascope::error::CapaScopeError;

/// アナライザ報告のエラーはメッセージをそのまま表示する
#[test]
fn test_analyzer_error_verbatim() {
    let err = CapaScopeError::Analyzer("unsupported file type".to_string());
    assert_eq!(format!("{}", err), "unsupported file type");
}

/// ファイル未検出エラー
#[test]
fn test_file_not_found_display() {
    let err = CapaScopeError::FileNotFound("/tmp/missing.bin".to_string());
    let display = format!("{}", err);
    assert!(display.contains("ファイルが見つかりません"));
    assert!(display.contains("/tmp/missing.bin"));
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: CapaScopeError = io_error.into();
    assert!(matches!(err, CapaScopeError::Io(_)));
}

/// JSONエラーからの変換
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: CapaScopeError = json_error.into();
    assert!(matches!(err, CapaScopeError::JsonParse(_)));
}

/// 2xx以外の応答はApiCallとして扱う（表示の確認）
#[test]
fn test_api_call_display() {
    let err = CapaScopeError::ApiCall("サーバ応答 500 Internal Server Error".to_string());
    assert!(format!("{}", err).contains("解析サービスの呼び出しに失敗"));
}
