use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapaScopeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("解析サービスの呼び出しに失敗: {0}")]
    ApiCall(String),

    // アナライザが返したメッセージをそのまま見せる
    #[error("{0}")]
    Analyzer(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("エクスポートエラー: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, CapaScopeError>;
