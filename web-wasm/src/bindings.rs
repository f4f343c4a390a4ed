//! NProgress バインディング
//!
//! グローバルの `NProgress` オブジェクト（scriptタグで読み込み済み）を呼び出す。

use route_progress_common::{Environment, ProgressWidget, WidgetOptions};
use wasm_bindgen::prelude::*;

// ============================================
// JavaScript関数のextern宣言
// ============================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = NProgress, js_name = "configure")]
    fn nprogress_configure(options: &JsValue);

    #[wasm_bindgen(js_namespace = NProgress, js_name = "set")]
    fn nprogress_set(position: f64);

    #[wasm_bindgen(js_namespace = NProgress, js_name = "start")]
    fn nprogress_start();

    #[wasm_bindgen(js_namespace = NProgress, js_name = "done")]
    fn nprogress_done(force: bool);
}

/// グローバルのNProgress
#[derive(Debug, Clone, Copy, Default)]
pub struct NProgress;

impl NProgress {
    /// `NProgress` がグローバルに定義されているか
    pub fn is_available() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("NProgress")).unwrap_or(false)
    }
}

impl ProgressWidget for NProgress {
    fn configure(&self, options: &WidgetOptions) {
        match serde_wasm_bindgen::to_value(options) {
            Ok(value) => nprogress_configure(&value),
            Err(e) => tracing::warn!(error = %e, "NProgress options could not be converted"),
        }
    }

    fn set(&self, position: f64) {
        nprogress_set(position);
    }

    fn start(&self) {
        nprogress_start();
    }

    fn done(&self, force: bool) {
        nprogress_done(force);
    }
}

/// 実行コンテキストを判定
///
/// documentとNProgressの両方がある場合のみ `Browser`。
pub fn detect_environment() -> Environment {
    let has_document = web_sys::window().and_then(|window| window.document()).is_some();
    if !has_document {
        return Environment::Server;
    }
    if !NProgress::is_available() {
        tracing::warn!("NProgress is not loaded, route progress disabled");
        return Environment::Server;
    }
    Environment::Browser
}
