use clap::Parser;
use indicatif::ProgressBar;
use sharprender::{cli, client, config, error, report};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{Result, SharpRenderError};
use sharprender_common::{normalize_url, Scan};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { url, output, no_wait } => {
            println!("🔍 sharprender - 画像パフォーマンススキャン\n");

            // 1. URL正規化
            let normalized = normalize_url(&url)?;
            if cli.verbose {
                println!("対象URL: {}", normalized);
                println!("APIベース: {}", config.get_base_url());
            }

            // 2. スキャン開始
            println!("[1/3] スキャンを開始中...");
            let client = ApiClient::new(config.get_base_url());
            let user_id = config.get_user_id()?;
            let created = client.submit_scan(&normalized, &user_id).await?;
            println!("✔ スキャンID: {}\n", created.scan_id);

            if no_wait {
                println!("`sharprender show {}` で結果を確認できます", created.scan_id);
                return Ok(());
            }

            // 3. 完了待ち（集計が付くまでポーリング）
            println!("[2/3] スキャン完了を待機中...");
            let scan = wait_for_scan(&client, &created.scan_id, &config).await?;
            println!("✔ スキャン完了 ({}枚の画像)\n", scan.images.len());

            // 4. レポート表示
            println!("[3/3] レポートを生成中...\n");
            println!("{}", report::render_report(&scan));

            if let Some(path) = output {
                std::fs::write(&path, scan.to_json_pretty()?)?;
                println!("✔ 結果を保存: {}", path.display());
            }

            println!(
                "\n✅ 完了 ({})",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            );
        }

        Commands::Show { scan_id, json } => {
            let client = ApiClient::new(config.get_base_url());
            let scan = client.fetch_scan(&scan_id).await?;

            if json {
                println!("{}", scan.to_json_pretty()?);
            } else {
                println!("{}", report::render_report(&scan));
            }
        }

        Commands::History { limit } => {
            let client = ApiClient::new(config.get_base_url());
            let user_id = config.get_user_id()?;
            let scans = client.fetch_history(&user_id).await?;
            println!("{}", report::render_history(&scans, limit));
        }

        Commands::Config { set_user_id, set_base_url, show } => {
            let mut config = config;

            if let Some(id) = set_user_id {
                config.set_user_id(id)?;
                println!("✔ ユーザーIDを設定しました");
            }

            if let Some(base_url) = set_base_url {
                config.set_base_url(base_url)?;
                println!("✔ APIベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.get_base_url());
                println!(
                    "  ユーザーID: {}",
                    config.user_id.as_deref().unwrap_or("未設定")
                );
                println!("  ポーリング間隔: {}秒", config.poll_interval_seconds);
                println!("  タイムアウト: {}秒", config.poll_timeout_seconds);
            }
        }
    }

    Ok(())
}

/// 集計が付与されるまでスキャンをポーリングする
async fn wait_for_scan(client: &ApiClient, scan_id: &str, config: &Config) -> Result<Scan> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("スキャン中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let scan = loop {
        let scan = client.fetch_scan(scan_id).await?;
        if scan.aggregations.is_some() {
            break scan;
        }

        if started.elapsed().as_secs() > config.poll_timeout_seconds {
            spinner.finish_and_clear();
            return Err(SharpRenderError::ScanTimeout(scan_id.to_string()));
        }

        tokio::time::sleep(Duration::from_secs(config.poll_interval_seconds)).await;
    };

    spinner.finish_and_clear();
    Ok(scan)
}
