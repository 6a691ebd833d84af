//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: アナライザの生ペイロード（カテゴリ→イベント列 or エラー）
//! - FlatEvent: カテゴリタグ付きの単一イベント（平坦化後）
//! - DisplayRecord: カード表示用の射影（手法名・参照URL・説明）
//! - CategoryGroup / GroupedView: カテゴリ別の表示レコード集計

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// カテゴリカードのプレビュー件数上限
pub const PREVIEW_LIMIT: usize = 3;

/// アナライザの生ペイロード
///
/// スキーマ検証は行わず、受け取ったJSONをそのまま保持する。
/// エクスポートは常にこの生データを書き出すため、ラッパーはtransparent。
///
/// 形は2通り:
/// - `{ "カテゴリ名": [event, ...], ... }`: 正常系
/// - `{ "error": "メッセージ" }`: アナライザ側の失敗
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    raw: Value,
}

impl AnalysisResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// 生ペイロードへの参照（エクスポート用）
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// アナライザが報告したエラーメッセージ
    ///
    /// `error` キーが文字列で存在する場合のみSome。
    /// このときペイロード全体をエラー扱いとし、カテゴリ列挙は空になる。
    pub fn error(&self) -> Option<&str> {
        self.raw.get("error").and_then(Value::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    /// カテゴリ→イベント列をペイロードの出現順に列挙
    ///
    /// 値が配列でないカテゴリは空のイベント列として扱う（エラーにしない）。
    pub fn categories(&self) -> Box<dyn Iterator<Item = (&str, &[Value])> + '_> {
        if self.is_error() {
            return Box::new(std::iter::empty());
        }
        match self.raw.as_object() {
            Some(map) => Box::new(map.iter().map(|(category, events)| {
                let events = events.as_array().map(|a| a.as_slice()).unwrap_or(&[]);
                (category.as_str(), events)
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    /// 全カテゴリの総イベント数
    pub fn event_count(&self) -> usize {
        self.categories().map(|(_, events)| events.len()).sum()
    }
}

/// カテゴリタグ付きの単一イベント
///
/// `category` は出所カテゴリのタグで、イベント自身が `category`
/// フィールドを持っていても上書きされない（そちらは `fields` に残る）。
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEvent {
    pub category: String,
    pub fields: Map<String, Value>,
}

impl FlatEvent {
    /// 既知フィールドの文字列取得
    ///
    /// 欠落・null は空文字、文字列以外のスカラーはJSONテキストに落とす。
    pub fn string_field(&self, key: &str) -> String {
        get_string(&self.fields, key).unwrap_or_default()
    }

    pub fn technique_name(&self) -> String {
        self.string_field("techniqueName")
    }

    pub fn url(&self) -> String {
        self.string_field("url")
    }

    pub fn description(&self) -> String {
        self.string_field("description")
    }

    /// カード表示用の射影。未知フィールドはここで落ちる
    pub fn to_display(&self) -> DisplayRecord {
        DisplayRecord {
            technique_name: self.technique_name(),
            url: self.url(),
            description: self.description(),
        }
    }
}

/// カード表示用の最小射影
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub technique_name: String,
    pub url: String,
    pub description: String,
}

/// カテゴリ1件分の表示レコード
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub records: Vec<DisplayRecord>,
}

impl CategoryGroup {
    /// 「N件の手法を検出」表示用の総数
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// 先頭PREVIEW_LIMIT件のプレビュー
    pub fn preview(&self) -> &[DisplayRecord] {
        let end = self.records.len().min(PREVIEW_LIMIT);
        &self.records[..end]
    }

    pub fn has_more(&self) -> bool {
        self.records.len() > PREVIEW_LIMIT
    }
}

/// カテゴリ別表示ビュー（出現順・空カテゴリは含まれない）
pub type GroupedView = Vec<CategoryGroup>;

/// JSONオブジェクトから文字列フィールドを取り出す
///
/// null はNone、文字列以外の値はJSONテキストとして返す。
pub fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    let value = map.get(key)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if value.is_null() {
        return None;
    }
    Some(value.to_string())
}
