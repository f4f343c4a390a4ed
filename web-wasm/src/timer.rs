//! `setTimeout` ベースのスケジューラ

use gloo::timers::callback::Timeout;
use route_progress_common::timer::{Scheduler, Task, TimerHandle};
use std::time::Duration;

/// gloo の `Timeout` で予約するスケジューラ
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// 予約済みの `Timeout`。dropでも `clearTimeout` される。
pub struct GlooTimer(Timeout);

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn schedule(&self, delay: Duration, task: Task) -> GlooTimer {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        GlooTimer(Timeout::new(millis, task))
    }
}

impl TimerHandle for GlooTimer {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}
