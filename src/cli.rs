use clap::{Parser, Subcommand};
use sookshma_common::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sookshma")]
#[command(about = "Sookshma Smart Edge - cold storage produce detection demo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をアップロードして擬似検出を実行
    Detect {
        /// 画像ファイル（複数指定時は順にアップロードし、最後の結果が残る）
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// 乱数シード（設定ファイルより優先）
        #[arg(long)]
        seed: Option<u64>,

        /// 擬似処理ディレイを省略
        #[arg(long)]
        no_delay: bool,

        /// 最終結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// JSONにプレビュー（data URL）を含める
        #[arg(long)]
        with_preview: bool,

        /// JSON出力先（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 作物マスタ（保管基準）を表示
    Catalog,

    /// 農家向けダッシュボードを表示
    Farmer {
        /// 表示言語 (en/te)
        #[arg(short, long)]
        lang: Option<Language>,

        /// リスクアラートも表示
        #[arg(long)]
        alert: bool,
    },

    /// ナビゲーション（ルート一覧）を表示
    Routes,

    /// 設定を表示/編集
    Config {
        /// 既定言語を設定 (en/te)
        #[arg(long)]
        set_language: Option<Language>,

        /// 乱数シードを設定
        #[arg(long)]
        set_seed: Option<u64>,

        /// 乱数シードを解除
        #[arg(long)]
        clear_seed: bool,

        /// 擬似処理ディレイの有無を設定
        #[arg(long)]
        set_delay: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
