//! Route Progress Common Library
//!
//! CLIとWeb(WASM)で共有されるナビゲーション進捗バーのコア

pub mod config;
pub mod driver;
pub mod error;
pub mod options;
pub mod style;
pub mod timeline;
pub mod timer;
pub mod widget;

pub use config::ProgressConfig;
pub use driver::{Environment, ProgressDriver, SessionState, Transition};
pub use error::{Error, Result};
pub use options::WidgetOptions;
pub use style::{style_tag, stylesheet};
pub use timeline::{replay, NavigationEvent, TimedCall, Timeline};
pub use timer::{ManualScheduler, ManualTimer, Scheduler, TimerHandle};
pub use widget::{ProgressWidget, RecordingWidget, WidgetCall};
