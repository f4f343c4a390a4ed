//! 進捗インジケーター（NProgress）の抽象
//!
//! 実体はプロセス全体で1つのグローバルなサービス。ドライバーへは明示的に注入する。

use crate::options::WidgetOptions;
use crate::timer::ManualScheduler;
use serde::Serialize;
use std::cell::RefCell;
use std::time::Duration;

/// 進捗インジケーターの操作API
pub trait ProgressWidget {
    /// オプションを適用 (`NProgress.configure`)
    fn configure(&self, options: &WidgetOptions);
    /// バー位置を設定 (`NProgress.set`)
    fn set(&self, position: f64);
    /// 表示開始 (`NProgress.start`)
    fn start(&self);
    /// 完了 (`NProgress.done`)。`force` なら未表示でも即座に除去する。
    fn done(&self, force: bool);
}

/// ウィジェットへの呼び出し
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum WidgetCall {
    Configure { options: WidgetOptions },
    Set { position: f64 },
    Start,
    Done { force: bool },
}

impl std::fmt::Display for WidgetCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetCall::Configure { options } => {
                let json = serde_json::to_string(options).map_err(|_| std::fmt::Error)?;
                write!(f, "configure({})", json)
            }
            WidgetCall::Set { position } => write!(f, "set({})", position),
            WidgetCall::Start => write!(f, "start()"),
            WidgetCall::Done { force } => write!(f, "done({})", force),
        }
    }
}

/// 呼び出しを記録するウィジェット
///
/// 仮想時計を渡すと各呼び出しの時刻も記録する。
#[derive(Default)]
pub struct RecordingWidget {
    clock: Option<ManualScheduler>,
    calls: RefCell<Vec<(Duration, WidgetCall)>>,
}

impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: ManualScheduler) -> Self {
        Self {
            clock: Some(clock),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().iter().map(|(_, call)| call.clone()).collect()
    }

    pub fn timed_calls(&self) -> Vec<(Duration, WidgetCall)> {
        self.calls.borrow().clone()
    }

    /// 記録をクリアし、それまでの呼び出しを返す
    pub fn take(&self) -> Vec<WidgetCall> {
        self.calls.borrow_mut().drain(..).map(|(_, call)| call).collect()
    }

    pub fn count(&self, predicate: impl Fn(&WidgetCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|(_, call)| predicate(call)).count()
    }

    fn record(&self, call: WidgetCall) {
        let at = self.clock.as_ref().map(ManualScheduler::now).unwrap_or_default();
        self.calls.borrow_mut().push((at, call));
    }
}

impl ProgressWidget for RecordingWidget {
    fn configure(&self, options: &WidgetOptions) {
        self.record(WidgetCall::Configure { options: options.clone() });
    }

    fn set(&self, position: f64) {
        self.record(WidgetCall::Set { position });
    }

    fn start(&self) {
        self.record(WidgetCall::Start);
    }

    fn done(&self, force: bool) {
        self.record(WidgetCall::Done { force });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let widget = RecordingWidget::new();
        widget.set(0.3);
        widget.start();
        widget.done(true);
        assert_eq!(
            widget.calls(),
            vec![
                WidgetCall::Set { position: 0.3 },
                WidgetCall::Start,
                WidgetCall::Done { force: true },
            ]
        );
    }

    #[test]
    fn test_take_clears() {
        let widget = RecordingWidget::new();
        widget.start();
        assert_eq!(widget.take().len(), 1);
        assert!(widget.calls().is_empty());
    }

    #[test]
    fn test_timestamps_from_clock() {
        let clock = ManualScheduler::new();
        let widget = RecordingWidget::with_clock(clock.clone());
        widget.start();
        clock.advance(Duration::from_millis(250));
        widget.done(true);

        let timed = widget.timed_calls();
        assert_eq!(timed[0].0, Duration::ZERO);
        assert_eq!(timed[1].0, Duration::from_millis(250));
    }

    #[test]
    fn test_display() {
        assert_eq!(WidgetCall::Set { position: 0.3 }.to_string(), "set(0.3)");
        assert_eq!(WidgetCall::Start.to_string(), "start()");
        assert_eq!(WidgetCall::Done { force: true }.to_string(), "done(true)");
        let configure = WidgetCall::Configure { options: WidgetOptions::default().with_minimum(0.1) };
        assert_eq!(configure.to_string(), r#"configure({"minimum":0.1})"#);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&WidgetCall::Done { force: true }).unwrap();
        assert_eq!(json, r#"{"op":"done","force":true}"#);
    }
}
