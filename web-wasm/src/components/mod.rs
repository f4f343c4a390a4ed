//! UIコンポーネント

pub mod route_progress;
