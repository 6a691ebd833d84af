//! 全文フィルタ（Filter Engine）
//!
//! フリーテキストのクエリで平坦列とカテゴリ別ビューを絞り込む。
//! 大文字小文字を区別しない部分一致で、空クエリは全件一致。
//!
//! 照合面は2通りで、これは意図した非対称:
//! - 平坦列: キー+値（カテゴリタグ含む）を連結した文字列
//! - カテゴリ別: 値のみを連結した文字列（カテゴリ名自体では一致しない）
//!
//! ネストしたオブジェクト・配列はJSONテキストとして照合面に含まれるため、
//! カード表示に昇格しないフィールドも検索には掛かる。

use crate::types::{AnalysisResult, CategoryGroup, DisplayRecord, FlatEvent, GroupedView};
use serde_json::Value;

/// 平坦列をクエリで絞り込む（キー+値照合）
pub fn filter_flat(flat: &[FlatEvent], query: &str) -> Vec<FlatEvent> {
    let needle = query.to_lowercase();
    flat.iter()
        .filter(|event| flat_match_text(event).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// ペイロードをカテゴリ単位で絞り込み、表示レコードに射影する（値のみ照合）
///
/// 絞り込み後に空になったカテゴリはビューに含めない。
/// エラーペイロードは空ビュー。
pub fn filter_grouped(result: &AnalysisResult, query: &str) -> GroupedView {
    let needle = query.to_lowercase();
    let mut view = Vec::new();
    for (category, events) in result.categories() {
        let records: Vec<DisplayRecord> = events
            .iter()
            .filter(|event| values_text(event).to_lowercase().contains(&needle))
            .map(display_record)
            .collect();
        if !records.is_empty() {
            view.push(CategoryGroup {
                category: category.to_string(),
                records,
            });
        }
    }
    view
}

/// 平坦列をカテゴリ別ビューに射影する
///
/// カテゴリの順序は列での初出順（= ペイロードの出現順）を保持する。
/// `filter_grouped` と合成順が違っても、カテゴリが残る限り
/// 同じDisplayRecord内容になる。
pub fn project(flat: &[FlatEvent]) -> GroupedView {
    let mut view: GroupedView = Vec::new();
    for event in flat {
        let record = event.to_display();
        match view.iter_mut().find(|g| g.category == event.category) {
            Some(group) => group.records.push(record),
            None => view.push(CategoryGroup {
                category: event.category.clone(),
                records: vec![record],
            }),
        }
    }
    view
}

/// 平坦イベントの照合面: カテゴリタグ + 各フィールドのキーと値
fn flat_match_text(event: &FlatEvent) -> String {
    let mut parts = Vec::with_capacity(event.fields.len() * 2 + 2);
    parts.push("category".to_string());
    parts.push(event.category.clone());
    for (key, value) in &event.fields {
        parts.push(key.clone());
        parts.push(value_text(value));
    }
    parts.join(" ")
}

/// 生イベントの照合面: フィールド値のみ
fn values_text(event: &Value) -> String {
    match event.as_object() {
        Some(fields) => fields
            .values()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(" "),
        None => value_text(event),
    }
}

/// 値1つの文字列化。文字列はそのまま、それ以外はJSONテキスト
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 生イベントからの表示射影（FlatEvent::to_displayと同じ規則）
fn display_record(event: &Value) -> DisplayRecord {
    match event.as_object() {
        Some(fields) => DisplayRecord {
            technique_name: crate::types::get_string(fields, "techniqueName").unwrap_or_default(),
            url: crate::types::get_string(fields, "url").unwrap_or_default(),
            description: crate::types::get_string(fields, "description").unwrap_or_default(),
        },
        None => DisplayRecord::default(),
    }
}
