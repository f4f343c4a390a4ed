//! ブラウザ上でのスケジューラ・環境判定テスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use gloo::timers::future::TimeoutFuture;
use route_progress_common::timer::{Scheduler, TimerHandle};
use route_progress_common::{Environment, ProgressConfig, ProgressDriver, RecordingWidget, WidgetCall};
use route_progress_wasm::{detect_environment, GlooScheduler};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// 予約したタスクが遅延後に実行される
#[wasm_bindgen_test]
async fn test_gloo_timer_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _timer = GlooScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));

    assert!(!fired.get());
    TimeoutFuture::new(60).await;
    assert!(fired.get());
}

/// 取り消したタスクは実行されない
#[wasm_bindgen_test]
async fn test_gloo_timer_cancel() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let timer = GlooScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
    timer.cancel();

    TimeoutFuture::new(60).await;
    assert!(!fired.get());
}

/// 実タイマーでの開始→遅延完了
#[wasm_bindgen_test]
async fn test_driver_with_gloo_scheduler() {
    let config = ProgressConfig { stop_delay_ms: 20, ..Default::default() };
    let widget = Rc::new(RecordingWidget::new());
    let mut driver = ProgressDriver::new(&config, widget.clone(), GlooScheduler);

    driver.observe(true);
    driver.observe(false);
    assert_eq!(widget.calls().len(), 2);

    TimeoutFuture::new(80).await;
    assert_eq!(widget.calls().last(), Some(&WidgetCall::Done { force: true }));
}

/// 遅延中に次の遷移が始まったら完了は呼ばれない
#[wasm_bindgen_test]
async fn test_driver_preempted_stop_never_fires() {
    let config = ProgressConfig { stop_delay_ms: 30, ..Default::default() };
    let widget = Rc::new(RecordingWidget::new());
    let mut driver = ProgressDriver::new(&config, widget.clone(), GlooScheduler);

    driver.observe(true);
    driver.observe(false);
    TimeoutFuture::new(5).await;
    driver.observe(true);

    TimeoutFuture::new(100).await;
    assert_eq!(widget.count(|c| matches!(c, WidgetCall::Done { .. })), 0);
}

/// NProgressを読み込んでいないページではドライバーを動かさない
#[wasm_bindgen_test]
fn test_detect_environment_without_nprogress() {
    assert_eq!(detect_environment(), Environment::Server);
}
