//! ルート遷移プログレスバーコンポーネント

use crate::bindings::{detect_environment, NProgress};
use crate::timer::GlooScheduler;
use leptos::prelude::*;
use route_progress_common::{stylesheet, ProgressConfig, ProgressDriver, WidgetOptions};
use std::cell::RefCell;
use std::rc::Rc;

/// ルーターの遷移中シグナルに合わせてNProgressを表示する
///
/// ブラウザ以外（SSR）やNProgress未読込の場合はstyleタグだけを描画する。
///
/// 追従するのは `is_routing` と `options` だけ。`color` `height` `start_position`
/// `stop_delay_ms` `nonce` は生成時に一度だけ読むので、変更する場合は再mountする。
#[component]
pub fn RouteProgress(
    /// ルーターの「遷移中」シグナル
    #[prop(into)]
    is_routing: Signal<bool>,
    /// バーの色 (既定: `#b0f6ff`)
    #[prop(optional, into)]
    color: Option<String>,
    /// 開始位置 (既定: 0.3)
    #[prop(optional)]
    start_position: Option<f64>,
    /// 完了までの遅延ms (既定: 400)
    #[prop(optional)]
    stop_delay_ms: Option<u64>,
    /// バーの太さpx (既定: 3)
    #[prop(optional)]
    height: Option<u32>,
    /// NProgressにそのまま渡すオプション
    #[prop(optional, into)]
    options: MaybeProp<WidgetOptions>,
    /// styleタグのCSP nonce
    #[prop(optional, into)]
    nonce: Option<String>,
) -> impl IntoView {
    let defaults = ProgressConfig::default();
    let config = ProgressConfig {
        color: color.unwrap_or(defaults.color),
        start_position: start_position.unwrap_or(defaults.start_position),
        stop_delay_ms: stop_delay_ms.unwrap_or(defaults.stop_delay_ms),
        height: height.unwrap_or(defaults.height),
        options: None,
        nonce: nonce.filter(|n| !n.is_empty()),
    }
    .normalized();

    if let Some(driver) =
        ProgressDriver::attach(detect_environment(), &config, Rc::new(NProgress), GlooScheduler)
    {
        let driver = Rc::new(RefCell::new(driver));

        let options_driver = Rc::clone(&driver);
        Effect::new(move |_| {
            let current = options.get();
            options_driver.borrow_mut().apply_options(current.as_ref());
        });

        Effect::new(move |_| {
            let navigating = is_routing.get();
            driver.borrow_mut().observe(navigating);
        });
    }

    let css = stylesheet(&config.color, config.height);

    view! { <style nonce=config.nonce inner_html=css></style> }
}
