//! キャンセル可能なタイマー
//!
//! ブラウザでは `setTimeout`、テストやCLIの再生では仮想時計を使う。

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// 遅延実行されるタスク
pub type Task = Box<dyn FnOnce()>;

/// 予約済みタイマーのハンドル
pub trait TimerHandle {
    /// 予約を取り消す。発火済みなら何もしない。
    ///
    /// 戻った時点でタスクが今後実行されないことを保証する。
    fn cancel(self);
}

/// タイマーの予約を行うサービス
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

// ============================================
// 仮想時計
// ============================================

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// 手動で時間を進める決定的なスケジューラ
///
/// 同じ時刻に予約されたタスクは予約順に実行される。
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// [`ManualScheduler`] のハンドル
#[derive(Debug)]
pub struct ManualTimer {
    key: (Duration, u64),
    clock: Weak<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の仮想時刻
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// 未発火のタスク数
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// 時間を進め、期限が来たタスクを実行する。実行したタスク数を返す。
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            // タスク実行中に再予約できるよう、借用はここで手放す
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock.tasks.keys().next().copied().filter(|(at, _)| *at <= target);
                due.and_then(|key| {
                    clock.now = key.0;
                    clock.tasks.remove(&key)
                })
            };
            match next {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    /// 予約済みタスクがなくなるまで時間を進める
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        loop {
            let next = self.clock.borrow().tasks.keys().next().copied();
            let Some((at, _)) = next else { break };
            fired += self.advance(at.saturating_sub(self.now()));
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now + delay, clock.next_id);
        clock.next_id += 1;
        clock.tasks.insert(key, task);
        ManualTimer {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().tasks.remove(&self.key);
        }
    }
}
