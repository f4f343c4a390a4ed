//! ナビゲーション状態 → 進捗バー の同期
//!
//! ルーターの「遷移中」フラグの変化を受け取り、ウィジェットの開始/完了を呼び出す。
//! 完了は遅延実行し、その間に次の遷移が始まった場合は取り消す。
//!
//! ```text
//! Idle   --[navigating = true ]--> Active : set(start_position), start()
//! Active --[navigating = false]--> Idle   : done(true) を stop_delay 後に予約
//! ```

use crate::config::ProgressConfig;
use crate::options::WidgetOptions;
use crate::timer::{Scheduler, TimerHandle};
use crate::widget::ProgressWidget;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// 実行コンテキスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// documentとウィジェットが利用できる
    Browser,
    /// サーバーサイドレンダリング等。ドライバーは動かさない
    Server,
}

/// 進捗セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// `observe` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// 開始した（set + start を呼んだ）
    Started,
    /// 完了を予約した
    Stopping,
    /// 変化なし
    Unchanged,
}

struct PendingStop<H> {
    handle: H,
    fired: Rc<Cell<bool>>,
}

/// 進捗バーのドライバー
pub struct ProgressDriver<W: ProgressWidget + 'static, S: Scheduler> {
    widget: Rc<W>,
    scheduler: S,
    start_position: f64,
    stop_delay: Duration,
    state: SessionState,
    pending_stop: Option<PendingStop<S::Handle>>,
    applied_options: Option<WidgetOptions>,
}

impl<W: ProgressWidget + 'static, S: Scheduler> ProgressDriver<W, S> {
    pub fn new(config: &ProgressConfig, widget: Rc<W>, scheduler: S) -> Self {
        Self {
            widget,
            scheduler,
            start_position: config.start_position,
            stop_delay: config.stop_delay(),
            state: SessionState::Idle,
            pending_stop: None,
            applied_options: None,
        }
    }

    /// ブラウザ環境でのみドライバーを生成する
    ///
    /// `Server` では状態・タイマー・ウィジェット呼び出しを一切作らない。
    pub fn attach(
        environment: Environment,
        config: &ProgressConfig,
        widget: Rc<W>,
        scheduler: S,
    ) -> Option<Self> {
        match environment {
            Environment::Browser => Some(Self::new(config, widget, scheduler)),
            Environment::Server => {
                tracing::debug!("not a browser context, progress driver skipped");
                None
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// 未発火の完了予約があるか
    pub fn has_pending_stop(&self) -> bool {
        self.pending_stop
            .as_ref()
            .is_some_and(|pending| !pending.fired.get())
    }

    /// ナビゲーション状態を反映する
    pub fn observe(&mut self, navigating: bool) -> Transition {
        match (self.state, navigating) {
            (SessionState::Idle, true) => {
                self.state = SessionState::Active;
                // 前回の遅延完了が新しいバーを消さないよう先に取り消す
                self.cancel_pending_stop();
                self.widget.set(self.start_position);
                self.widget.start();
                tracing::debug!(start_position = self.start_position, "navigation started");
                Transition::Started
            }
            (SessionState::Active, false) => {
                self.state = SessionState::Idle;
                self.cancel_pending_stop();

                let fired = Rc::new(Cell::new(false));
                let widget = Rc::clone(&self.widget);
                let flag = Rc::clone(&fired);
                let handle = self.scheduler.schedule(
                    self.stop_delay,
                    Box::new(move || {
                        flag.set(true);
                        widget.done(true);
                    }),
                );
                self.pending_stop = Some(PendingStop { handle, fired });
                tracing::debug!(delay = ?self.stop_delay, "navigation finished, stop scheduled");
                Transition::Stopping
            }
            _ => Transition::Unchanged,
        }
    }

    /// オプションを適用する。空のオプションや同じ値が続く場合は呼び出さない。
    pub fn apply_options(&mut self, options: Option<&WidgetOptions>) {
        let Some(options) = options.filter(|options| !options.is_empty()) else { return };
        if self.applied_options.as_ref() == Some(options) {
            return;
        }
        self.widget.configure(options);
        self.applied_options = Some(options.clone());
        tracing::debug!(?options, "widget configured");
    }

    fn cancel_pending_stop(&mut self) {
        if let Some(pending) = self.pending_stop.take() {
            if !pending.fired.get() {
                tracing::debug!("pending stop cancelled");
            }
            pending.handle.cancel();
        }
    }
}
