//! 進捗バーの公開設定
//!
//! コンポーネントのprops、CLIの設定ファイルの両方で同じ型を使う。

use crate::error::{Error, Result};
use crate::options::WidgetOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_COLOR: &str = "#b0f6ff";
pub const DEFAULT_START_POSITION: f64 = 0.3;
pub const DEFAULT_STOP_DELAY_MS: u64 = 400;
pub const DEFAULT_HEIGHT: u32 = 3;

/// 進捗バー設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressConfig {
    /// バー・スピナーの色
    pub color: String,
    /// ナビゲーション開始時のバー位置 (0.0 <= x < 1.0)
    pub start_position: f64,
    /// 完了処理までの遅延 (ms)
    pub stop_delay_ms: u64,
    /// バーの太さ (px)
    pub height: u32,
    /// NProgressにそのまま渡すオプション
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<WidgetOptions>,
    /// styleタグに付与するCSP nonce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            start_position: DEFAULT_START_POSITION,
            stop_delay_ms: DEFAULT_STOP_DELAY_MS,
            height: DEFAULT_HEIGHT,
            options: None,
            nonce: None,
        }
    }
}

impl ProgressConfig {
    /// JSON文字列から読み込み（未指定キーは既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn stop_delay(&self) -> Duration {
        Duration::from_millis(self.stop_delay_ms)
    }

    /// 厳密な検証（CLI・設定ファイル向け）
    pub fn validate(&self) -> Result<()> {
        if !is_valid_start_position(self.start_position) {
            return Err(Error::InvalidStartPosition(self.start_position));
        }
        if !is_safe_color(&self.color) {
            return Err(Error::InvalidColor(self.color.clone()));
        }
        if self.height == 0 {
            return Err(Error::InvalidHeight(self.height));
        }
        Ok(())
    }

    /// 不正な値を補正した設定を返す（コンポーネント向け）
    ///
    /// 補正した項目ごとに警告ログを出す。
    pub fn normalized(mut self) -> Self {
        if !is_valid_start_position(self.start_position) {
            let fixed = if self.start_position.is_nan() {
                DEFAULT_START_POSITION
            } else {
                self.start_position.clamp(0.0, MAX_START_POSITION)
            };
            tracing::warn!(
                start_position = self.start_position,
                fixed,
                "start position out of range, clamped"
            );
            self.start_position = fixed;
        }
        if !is_safe_color(&self.color) {
            tracing::warn!(color = %self.color, "unsafe color, falling back to default");
            self.color = DEFAULT_COLOR.to_string();
        }
        if self.height == 0 {
            tracing::warn!("height 0 is invisible, falling back to default");
            self.height = DEFAULT_HEIGHT;
        }
        self
    }
}

// 1.0は「完了」と同じ見た目になるため開始位置としては除外する
const MAX_START_POSITION: f64 = 0.99;

fn is_valid_start_position(value: f64) -> bool {
    value.is_finite() && (0.0..1.0).contains(&value)
}

/// styleタグ内に埋め込んでもルールを壊さない色指定か
fn is_safe_color(color: &str) -> bool {
    !color.trim().is_empty()
        && !color
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\n' | '\r'))
}
