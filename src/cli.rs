use clap::{Parser, Subcommand};
use route_progress_common::ProgressConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "route-progress")]
#[command(about = "ルート遷移プログレスバーのスタイル生成・遷移シミュレーション", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/route-progress/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// サーバー側HTMLに埋め込むstyleタグを出力
    Style {
        #[command(flatten)]
        overrides: Overrides,

        /// CSP nonce
        #[arg(long)]
        nonce: Option<String>,

        /// styleタグで包まずCSSのみ出力
        #[arg(long)]
        css_only: bool,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ナビゲーション遷移を再生してウィジェット呼び出しを表示
    Simulate {
        /// 遷移列 (例: "start@0,end@120,start@170")
        #[arg(short, long, required = true)]
        timeline: String,

        #[command(flatten)]
        overrides: Overrides,

        /// サーバー環境として実行（呼び出しは発生しない）
        #[arg(long)]
        server: bool,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,

        /// 既存の設定ファイルを上書き
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// 設定ファイルの値を上書きするオプション
#[derive(clap::Args, Clone, Debug, Default)]
pub struct Overrides {
    /// バーの色
    #[arg(long)]
    pub color: Option<String>,

    /// バーの太さ (px)
    #[arg(long)]
    pub height: Option<u32>,

    /// 開始位置 (0.0-1.0未満)
    #[arg(long)]
    pub start_position: Option<f64>,

    /// 完了までの遅延 (ms)
    #[arg(long)]
    pub stop_delay_ms: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, mut config: ProgressConfig) -> ProgressConfig {
        if let Some(color) = &self.color {
            config.color = color.clone();
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(start_position) = self.start_position {
            config.start_position = start_position;
        }
        if let Some(stop_delay_ms) = self.stop_delay_ms {
            config.stop_delay_ms = stop_delay_ms;
        }
        config
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
