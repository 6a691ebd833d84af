use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capascope")]
#[command(about = "バイナリ挙動解析ビューア（capa解析結果の集計・タイムライン再生）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// バイナリを解析サービスに送信して結果を表示
    Analyze {
        /// 解析対象ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 結果の絞り込みクエリ（部分一致・大文字小文字無視）
        #[arg(short, long)]
        query: Option<String>,

        /// レポートJSONの出力先（デフォルト: 出力しない）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 検出手法を2秒間隔で順に再生
        #[arg(short, long)]
        replay: bool,

        /// 解析サービスのベースURL（設定ファイルより優先）
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// 保存済みレポートJSONを読み込んで表示
    Show {
        /// レポートJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 結果の絞り込みクエリ
        #[arg(short, long)]
        query: Option<String>,

        /// 検出手法を2秒間隔で順に再生
        #[arg(short, long)]
        replay: bool,
    },

    /// 設定の表示・変更
    Config {
        /// 解析サービスのベースURLを設定
        #[arg(long)]
        set_backend: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
