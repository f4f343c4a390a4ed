//! RouteProgressコンポーネントのmountテスト
//!
//! 呼び出しを記録するスタブ `NProgress` をグローバルに置いてから描画する。
//! `wasm-pack test --headless --firefox web-wasm` で実行

use gloo::timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use route_progress_common::{stylesheet, WidgetOptions};
use route_progress_wasm::RouteProgress;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// 呼び出しを文字列で `calls` に積むスタブをグローバルの `NProgress` にする
fn install_stub() -> js_sys::Array {
    let calls = js_sys::Array::new();
    let factory = js_sys::Function::new_with_args(
        "calls",
        "return {
            configure: function (o) { calls.push('configure:' + JSON.stringify(o)); },
            set: function (n) { calls.push('set:' + n); },
            start: function () { calls.push('start'); },
            done: function (f) { calls.push('done:' + f); }
        };",
    );
    let stub = factory.call1(&JsValue::NULL, &calls).unwrap();
    js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str("NProgress"), &stub).unwrap();
    calls
}

fn recorded(calls: &js_sys::Array) -> Vec<String> {
    calls.iter().filter_map(|value| value.as_string()).collect()
}

/// mount先のdivをbodyに追加
fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into::<HtmlElement>().unwrap()
}

fn rendered_style(parent: &HtmlElement) -> Element {
    parent.query_selector("style").unwrap().expect("styleタグが描画されていない")
}

/// 開始→終了→開始で、保留中の完了が取り消される
#[wasm_bindgen_test]
async fn test_route_progress_follows_signal() {
    let calls = install_stub();
    let (routing, set_routing) = signal(false);
    let parent = container();

    let handle = mount_to(parent.clone(), move || {
        view! { <RouteProgress is_routing=routing nonce="test-nonce" color="#ff0000" height=5 /> }
    });
    TimeoutFuture::new(10).await;
    assert!(recorded(&calls).is_empty());

    set_routing.set(true);
    TimeoutFuture::new(10).await;
    assert_eq!(recorded(&calls), vec!["set:0.3", "start"]);

    set_routing.set(false);
    TimeoutFuture::new(10).await;
    set_routing.set(true);
    TimeoutFuture::new(500).await;

    let log = recorded(&calls);
    assert_eq!(log, vec!["set:0.3", "start", "set:0.3", "start"]);
    assert!(log.iter().all(|call| !call.starts_with("done")));

    let style = rendered_style(&parent);
    let nonce = js_sys::Reflect::get(&style, &JsValue::from_str("nonce")).unwrap();
    assert_eq!(nonce.as_string().as_deref(), Some("test-nonce"));
    assert_eq!(style.text_content().unwrap_or_default(), stylesheet("#ff0000", 5));

    drop(handle);
}

/// 終了後は遅延を置いて done(true) が呼ばれる
#[wasm_bindgen_test]
async fn test_route_progress_done_after_delay() {
    let calls = install_stub();
    let (routing, set_routing) = signal(false);

    let handle = mount_to(container(), move || {
        view! { <RouteProgress is_routing=routing stop_delay_ms=30 /> }
    });
    set_routing.set(true);
    TimeoutFuture::new(10).await;
    set_routing.set(false);
    TimeoutFuture::new(10).await;
    assert_eq!(recorded(&calls), vec!["set:0.3", "start"]);

    TimeoutFuture::new(80).await;
    assert_eq!(recorded(&calls), vec!["set:0.3", "start", "done:true"]);

    drop(handle);
}

/// 範囲外の開始位置は丸めてから渡す
#[wasm_bindgen_test]
async fn test_route_progress_clamps_start_position() {
    let calls = install_stub();
    let (routing, set_routing) = signal(false);

    let handle = mount_to(container(), move || {
        view! { <RouteProgress is_routing=routing start_position=1.5 /> }
    });
    set_routing.set(true);
    TimeoutFuture::new(10).await;
    assert_eq!(recorded(&calls), vec!["set:0.99", "start"]);

    drop(handle);
}

/// 同じオプションの再設定ではconfigureを呼ばない
#[wasm_bindgen_test]
async fn test_route_progress_configures_once_per_value() {
    let calls = install_stub();
    let (routing, _) = signal(false);
    let (options, set_options) = signal(Some(WidgetOptions::default().with_minimum(0.1)));

    let handle = mount_to(container(), move || {
        view! { <RouteProgress is_routing=routing options=Signal::derive(move || options.get()) /> }
    });
    TimeoutFuture::new(10).await;
    set_options.set(Some(WidgetOptions::default().with_minimum(0.1)));
    TimeoutFuture::new(10).await;

    let log = recorded(&calls);
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("configure:"));
    assert!(log[0].contains("\"minimum\":0.1"));

    set_options.set(Some(WidgetOptions::default().with_minimum(0.2)));
    TimeoutFuture::new(10).await;
    assert_eq!(recorded(&calls).len(), 2);

    drop(handle);
}
