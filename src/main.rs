use capascope::{cli, client, config, display, error, replay};
use capascope_common::{to_pretty_json, AnalysisResult, FlatEvent, REPORT_FILE_NAME};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Confirm;
use error::{CapaScopeError, Result};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file, query, output, replay: do_replay, backend } => {
            println!("🔬 capascope - バイナリ解析\n");

            let backend_url = backend.unwrap_or_else(|| config.backend_url());
            if cli.verbose {
                println!("解析サービス: {}", backend_url);
            }

            // 1. ファイル確認
            println!("[1/3] ファイルを確認中...");
            if !file.exists() {
                return Err(CapaScopeError::FileNotFound(file.display().to_string()));
            }
            let size_mb = client::file_size_mb(&file)?;
            let digest = client::sha256_hex(&file)?;
            println!("  ファイル: {}", file.display());
            println!("  サイズ: {:.2} MB", size_mb);
            println!("  SHA-256: {}", digest);
            if size_mb > client::SOFT_SIZE_LIMIT_MB as f64 {
                // ソフト上限。送信はする
                println!(
                    "⚠ {}MBを超えています。解析に失敗する可能性があります",
                    client::SOFT_SIZE_LIMIT_MB
                );
            }
            println!();

            // 2. 解析リクエスト
            println!("[2/3] 解析リクエスト送信中...");
            let analyzer = client::AnalyzerClient::new(&backend_url)?;
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("解析サービスの応答を待っています...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let outcome = analyzer.analyze(&file).await;
            spinner.finish_and_clear();
            let result = outcome?;
            println!("✔ 解析完了（{}）\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

            // 3. 結果表示
            println!("[3/3] 結果を表示中...\n");
            let search = query.unwrap_or_default();
            let filtered = render_or_exit(&result, &search)?;

            if let Some(path) = output {
                export_report(&result, &path)?;
            }

            if do_replay {
                println!("▶ タイムライン再生\n");
                replay::run_replay(&filtered).await;
            }
        }

        Commands::Show { input, query, replay: do_replay } => {
            println!("📄 capascope - レポート表示\n");

            if !input.exists() {
                return Err(CapaScopeError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let result: AnalysisResult = serde_json::from_str(&content)?;

            let search = query.unwrap_or_default();
            let filtered = render_or_exit(&result, &search)?;

            if do_replay {
                println!("▶ タイムライン再生\n");
                replay::run_replay(&filtered).await;
            }
        }

        Commands::Config { set_backend, show } => {
            let mut config = config;

            if let Some(url) = set_backend {
                config.set_backend_url(url)?;
                println!("✔ 解析サービスのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  解析サービス: {}", config.backend_url());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// 結果を表示し、アナライザ報告のエラーはここで終端する
///
/// メッセージは1回だけ表示して非ゼロ終了（Errで返すとDebug表示で
/// 二重に出てしまう）。それ以外のエラーは呼び出し側へそのまま返す。
fn render_or_exit(result: &AnalysisResult, query: &str) -> Result<Vec<FlatEvent>> {
    match display::render_result(result, query) {
        Ok(filtered) => Ok(filtered),
        Err(CapaScopeError::Analyzer(message)) => {
            println!("❌ {}", message);
            std::process::exit(1);
        }
        Err(err) => Err(err),
    }
}

/// 生ペイロードをレポートJSONとして書き出す
fn export_report(result: &AnalysisResult, path: &Path) -> Result<()> {
    let path = if path.is_dir() {
        path.join(REPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} を上書きしますか?", path.display()))
            .default(false)
            .interact()
            .map_err(|e| CapaScopeError::Export(e.to_string()))?;
        if !overwrite {
            println!("エクスポートを中止しました");
            return Ok(());
        }
    }

    let json = to_pretty_json(result).map_err(|e| CapaScopeError::Export(e.to_string()))?;
    std::fs::write(&path, json)?;
    println!("✔ レポートを保存: {}", path.display());
    Ok(())
}
