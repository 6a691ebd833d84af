//! capascope - バイナリ挙動解析ビューア（CLI）
//!
//! バイナリを外部の解析サービスへ送信し、検出された手法を
//! カテゴリ別集計・全文フィルタ・タイムライン再生で表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod replay;
