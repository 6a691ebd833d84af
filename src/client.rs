//! 解析サービスクライアント
//!
//! バイナリをmultipartでPOSTし、AnalysisResultを受け取る。
//! リトライはしない（失敗はその投稿で終端、再実行はユーザー操作）。

use crate::error::{CapaScopeError, Result};
use capascope_common::AnalysisResult;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;

/// ソフト上限（MB）。超過しても送信はする（サーバ側の判断に委ねる）
pub const SOFT_SIZE_LIMIT_MB: u64 = 50;

const REQUEST_TIMEOUT_SECS: u64 = 300;

pub struct AnalyzerClient {
    backend_url: String,
    http: reqwest::Client,
}

impl AnalyzerClient {
    pub fn new(backend_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            backend_url: backend_url.into(),
            http,
        })
    }

    /// ファイルを `POST {backend}/capa_analyze` に送信
    ///
    /// 2xx以外はApiCall。2xxでも `{error: ...}` ペイロードはそのまま返す
    /// （呼び出し側がAnalysisResult::errorで判定する）。
    pub async fn analyze(&self, path: &Path) -> Result<AnalysisResult> {
        if !path.exists() {
            return Err(CapaScopeError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.bin".to_string());
        let bytes = std::fs::read(path)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/capa_analyze", self.backend_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CapaScopeError::ApiCall(format!(
                "サーバ応答 {}",
                status
            )));
        }

        let raw: serde_json::Value = response.json().await?;
        Ok(AnalysisResult::new(raw))
    }
}

/// ファイルのSHA-256ダイジェスト（16進）
pub fn sha256_hex(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// ファイルサイズ（MB）
pub fn file_size_mb(path: &Path) -> Result<f64> {
    let meta = std::fs::metadata(path)?;
    Ok(meta.len() as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_value() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("sample.bin");
        std::fs::write(&path, b"abc").expect("書き込み失敗");

        let digest = sha256_hex(&path).expect("ダイジェスト計算失敗");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_file_size_mb() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("sample.bin");
        std::fs::write(&path, vec![0u8; 1024 * 1024]).expect("書き込み失敗");

        let size = file_size_mb(&path).expect("サイズ取得失敗");
        assert!((size - 1.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_analyze_missing_file() {
        let client = AnalyzerClient::new("http://localhost:8000").expect("クライアント生成失敗");
        let result = client.analyze(Path::new("/nonexistent/sample.bin")).await;
        assert!(matches!(
            result,
            Err(crate::error::CapaScopeError::FileNotFound(_))
        ));
    }
}
