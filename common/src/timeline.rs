//! ナビゲーションタイムラインの再生
//!
//! `start@0,end@120,start@170` のような遷移列を仮想時計上でドライバーに流し、
//! ウィジェット呼び出しを時刻付きで返す。

use crate::config::ProgressConfig;
use crate::driver::{Environment, ProgressDriver};
use crate::error::{Error, Result};
use crate::timer::ManualScheduler;
use crate::widget::{RecordingWidget, WidgetCall};
use serde::Serialize;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

/// ナビゲーション状態の変化1件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub at: Duration,
    pub navigating: bool,
}

/// 時刻順に並んだナビゲーションイベント列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<NavigationEvent>,
}

impl Timeline {
    /// イベント列から生成（時刻は非減少であること）
    pub fn new(events: Vec<NavigationEvent>) -> Result<Self> {
        if let Some(pair) = events.windows(2).find(|pair| pair[1].at < pair[0].at) {
            return Err(Error::Timeline(format!(
                "events must be in time order ({}ms after {}ms)",
                pair[1].at.as_millis(),
                pair[0].at.as_millis()
            )));
        }
        Ok(Self { events })
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromStr for Timeline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let events = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_event)
            .collect::<Result<Vec<_>>>()?;
        Self::new(events)
    }
}

fn parse_event(token: &str) -> Result<NavigationEvent> {
    let (state, at) = token
        .split_once('@')
        .ok_or_else(|| Error::Timeline(format!("expected STATE@MS, got {:?}", token)))?;

    let navigating = match state.trim().to_lowercase().as_str() {
        "start" | "on" | "true" | "1" => true,
        "end" | "off" | "false" | "0" => false,
        other => return Err(Error::Timeline(format!("unknown state {:?}", other))),
    };
    let millis: u64 = at
        .trim()
        .parse()
        .map_err(|_| Error::Timeline(format!("invalid time {:?}", at)))?;

    Ok(NavigationEvent {
        at: Duration::from_millis(millis),
        navigating,
    })
}

/// 時刻付きのウィジェット呼び出し
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedCall {
    pub at_ms: u64,
    pub call: WidgetCall,
}

/// タイムラインを再生してウィジェット呼び出しを返す
///
/// 最後のイベントの後、予約済みの完了処理が全て発火するまで時間を進める。
pub fn replay(timeline: &Timeline, config: &ProgressConfig, environment: Environment) -> Vec<TimedCall> {
    let scheduler = ManualScheduler::new();
    let widget = Rc::new(RecordingWidget::with_clock(scheduler.clone()));

    let Some(mut driver) = ProgressDriver::attach(environment, config, Rc::clone(&widget), scheduler.clone()) else {
        return Vec::new();
    };
    driver.apply_options(config.options.as_ref());

    for event in timeline.events() {
        scheduler.advance(event.at.saturating_sub(scheduler.now()));
        driver.observe(event.navigating);
    }
    scheduler.run_until_idle();

    widget
        .timed_calls()
        .into_iter()
        .map(|(at, call)| TimedCall {
            at_ms: u64::try_from(at.as_millis()).unwrap_or(u64::MAX),
            call,
        })
        .collect()
}
