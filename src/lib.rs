//! route-progress CLI
//!
//! サーバー側HTML向けのstyleタグ生成と、ナビゲーション遷移の再生を行う。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
