//! レポートダウンロード
//!
//! 生ペイロードのJSONをBlob化し、アンカー要素経由でダウンロードさせる。

use capascope_common::{to_pretty_json, AnalysisResult, REPORT_FILE_NAME};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 生ペイロードをapplication/jsonのオブジェクトURLにする
fn report_blob_url(result: &AnalysisResult) -> Result<String, JsValue> {
    let json = to_pretty_json(result).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&json));

    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    Url::create_object_url_with_blob(&blob)
}

/// `analysis_report.json` としてダウンロードを開始する
pub fn download_report(result: &AnalysisResult) -> Result<(), JsValue> {
    let url = report_blob_url(result)?;

    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(REPORT_FILE_NAME);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body not found"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_report_blob_url_is_object_url() {
        let result = AnalysisResult::new(json!({
            "Discovery": [{"techniqueName": "T1082"}],
        }));

        let url = report_blob_url(&result).expect("Blob URL生成失敗");
        assert!(url.starts_with("blob:"));
        Url::revoke_object_url(&url).expect("revoke失敗");
    }
}
