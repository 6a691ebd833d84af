//! レポートエクスポート
//!
//! 生ペイロードをそのままJSONドキュメントとして書き出す。
//! 絞り込み状態はエクスポートに影響しない。

use crate::error::Result;
use crate::types::AnalysisResult;

/// エクスポート時のドキュメント名
pub const REPORT_FILE_NAME: &str = "analysis_report.json";

/// 生ペイロードを整形JSON（2スペースインデント）に変換
pub fn to_pretty_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result.raw())?)
}
