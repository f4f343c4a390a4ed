//! 出力の整形

use crate::cli::OutputFormat;
use crate::error::Result;
use route_progress_common::{style_tag, stylesheet, ProgressConfig, TimedCall};

/// styleタグ（またはCSSのみ）を生成
pub fn render_style(config: &ProgressConfig, css_only: bool) -> String {
    if css_only {
        stylesheet(&config.color, config.height)
    } else {
        style_tag(config)
    }
}

/// 再生結果を整形
pub fn render_calls(calls: &[TimedCall], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(calls)?),
        OutputFormat::Text => {
            if calls.is_empty() {
                return Ok("(ウィジェット呼び出しなし)".to_string());
            }
            let lines: Vec<String> = calls
                .iter()
                .map(|timed| format!("{:>6}ms  {}", timed.at_ms, timed.call))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// 設定を表示用JSONに整形
pub fn render_config(config: &ProgressConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
