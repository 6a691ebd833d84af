//! 解析サービスAPI連携
//!
//! バイナリをmultipart/form-dataで `POST {backend}/capa_analyze` に送信し、
//! カテゴリ→イベント列のJSON（またはエラーペイロード）を受け取る。
//! リトライはしない。

use capascope_common::AnalysisResult;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時に `CAPASCOPE_BACKEND_URL` で差し替え可能
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// 解析サービスのベースURL
pub fn backend_url() -> &'static str {
    option_env!("CAPASCOPE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// 解析エンドポイントのURL
fn endpoint_url(base: &str) -> String {
    format!("{}/capa_analyze", base.trim_end_matches('/'))
}

/// ファイルを解析サービスへ送信して結果を受け取る
///
/// 2xx以外はErr（トランスポート失敗）。2xxの `{error: ...}` は
/// そのままAnalysisResultとして返し、呼び出し側が振り分ける。
pub async fn analyze_file(file: &web_sys::File) -> Result<AnalysisResult, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let url = endpoint_url(backend_url());
    let request = Request::new_with_str_and_init(&url, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    // serde_jsonでパースしてカテゴリの出現順を保持する
    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("Empty response"))?;
    let raw: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    Ok(AnalysisResult::new(raw))
}
