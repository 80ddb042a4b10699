use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sharprender")]
#[command(about = "Webサイト画像パフォーマンススキャナー CLIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// URLをスキャンして画像パフォーマンスレポートを表示
    Scan {
        /// スキャン対象のURL（スキーム省略時はhttpsを補完）
        #[arg(required = true)]
        url: String,

        /// スキャン結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 完了を待たずにスキャンIDだけ表示
        #[arg(long)]
        no_wait: bool,
    },

    /// 既存スキャンのレポートを表示
    Show {
        /// スキャンID
        #[arg(required = true)]
        scan_id: String,

        /// レポートの代わりに生JSONを出力
        #[arg(long)]
        json: bool,
    },

    /// スキャン履歴を表示
    History {
        /// 表示件数
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// ユーザーIDを設定
        #[arg(long)]
        set_user_id: Option<String>,

        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
