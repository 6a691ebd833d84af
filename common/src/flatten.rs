//! 結果の平坦化（Result Normalizer）
//!
//! カテゴリ→イベント列のペイロードを、カテゴリタグ付きの
//! 単一シーケンスに変換する。タイムライン再生と全文検索の入力になる。

use crate::types::{AnalysisResult, FlatEvent};
use serde_json::{Map, Value};

/// ペイロードを平坦なイベント列に変換
///
/// - カテゴリはペイロードの出現順、カテゴリ内はイベントの並び順を保持
/// - 重複排除はしない（別カテゴリの同一イベントは両方現れる）
/// - エラーペイロードは空列（エラー表示は呼び出し側の責務）
/// - 純粋関数。入力が変わるたびに全体を再計算してよい
pub fn flatten(result: &AnalysisResult) -> Vec<FlatEvent> {
    let mut flat = Vec::with_capacity(result.event_count());
    for (category, events) in result.categories() {
        for event in events {
            flat.push(FlatEvent {
                category: category.to_string(),
                fields: event_fields(event),
            });
        }
    }
    flat
}

/// イベントのフィールド集合を取り出す
///
/// オブジェクトでないイベント（文字列など）は `value` キーに包んで
/// 全文検索から到達できるようにする。
fn event_fields(event: &Value) -> Map<String, Value> {
    match event.as_object() {
        Some(fields) => fields.clone(),
        None => {
            let mut fields = Map::new();
            fields.insert("value".to_string(), event.clone());
            fields
        }
    }
}
