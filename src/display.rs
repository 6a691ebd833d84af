//! グループビューの端末表示

use crate::error::{CapaScopeError, Result};
use capascope_common::{filter_flat, filter_grouped, flatten, AnalysisResult, FlatEvent, GroupedView, PREVIEW_LIMIT};

/// 結果を集計表示し、絞り込み後の平坦列を返す
///
/// アナライザ報告のエラーはAnalyzerエラーとして返すだけで、
/// ここでは出力しない（表示は呼び出し側が1回だけ行う）。
pub fn render_result(result: &AnalysisResult, query: &str) -> Result<Vec<FlatEvent>> {
    if let Some(message) = result.error() {
        return Err(CapaScopeError::Analyzer(message.to_string()));
    }

    let flat = flatten(result);
    let filtered = filter_flat(&flat, query);
    let grouped = filter_grouped(result, query);

    if query.is_empty() {
        println!("検出イベント: {}件\n", flat.len());
    } else {
        println!(
            "検出イベント: {}件（「{}」で絞り込み後 {}件）\n",
            flat.len(),
            query,
            filtered.len()
        );
    }
    print_grouped(&grouped);

    Ok(filtered)
}

/// カテゴリ別の集計をカード風に出力
///
/// Webのカード表示と同じ規則: 総数 + 先頭3件プレビュー + 残数。
pub fn print_grouped(view: &GroupedView) {
    if view.is_empty() {
        println!("該当する手法はありません");
        return;
    }

    for group in view {
        println!("■ {}（{}件の手法を検出）", group.category, group.total());
        for record in group.preview() {
            let name = if record.technique_name.is_empty() {
                "(名称なし)"
            } else {
                &record.technique_name
            };
            print!("  - {}", name);
            if !record.description.is_empty() {
                print!(": {}", record.description);
            }
            if !record.url.is_empty() {
                print!(" <{}>", record.url);
            }
            println!();
        }
        if group.has_more() {
            println!("  … 他{}件", group.total() - PREVIEW_LIMIT);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_result_returns_filtered_events() {
        let result = AnalysisResult::new(json!({
            "Discovery": [{"techniqueName": "T1082", "description": "OS discovery"}],
            "Execution": [{"techniqueName": "T1059", "description": "spawns cmd.exe"}],
        }));

        let filtered = render_result(&result, "discovery").expect("表示失敗");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].technique_name(), "T1082");
    }

    #[test]
    fn test_render_result_analyzer_error_message_appears_once() {
        // アナライザのメッセージはErrに1回だけ載る（Display一致・包み文字列なし）
        let result = AnalysisResult::new(json!({"error": "unsupported file type"}));

        let err = render_result(&result, "").unwrap_err();
        assert!(matches!(err, CapaScopeError::Analyzer(_)));
        assert_eq!(format!("{}", err), "unsupported file type");
    }
}
