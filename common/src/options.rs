//! NProgress設定オプション
//!
//! `NProgress.configure()` にそのまま渡されるマッピング。
//! 未指定のキーはシリアライズ時に省略され、ウィジェット側の既定値が使われる。

use serde::{Deserialize, Serialize};

/// NProgressの設定オプション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// 最小位置 (NProgress既定: 0.08)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// バー要素のHTMLテンプレート
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// CSSイージング関数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// アニメーション速度 (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    /// 自動で少しずつ進めるか
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trickle: Option<bool>,
    /// trickleの間隔 (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trickle_speed: Option<u32>,
    /// スピナーを表示するか
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_spinner: Option<bool>,
    /// バーを挿入する親要素のセレクタ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl WidgetOptions {
    /// 何も指定されていないか
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = Some(show);
        self
    }
}
