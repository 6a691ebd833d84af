//! CapaScope Common Library
//!
//! CLIとWeb(WASM)で共有される解析結果エンジン:
//! 平坦化・全文フィルタ・カテゴリ別集計・タイムライン再生・エクスポート

pub mod error;
pub mod filter;
pub mod flatten;
pub mod report;
pub mod timeline;
pub mod types;

pub use error::{Error, Result};
pub use filter::{filter_flat, filter_grouped, project};
pub use flatten::flatten;
pub use report::{to_pretty_json, REPORT_FILE_NAME};
pub use timeline::{Phase, Tick, TimelineStepper, STEP_INTERVAL_MS};
pub use types::{
    get_string, AnalysisResult, CategoryGroup, DisplayRecord, FlatEvent, GroupedView,
    PREVIEW_LIMIT,
};
