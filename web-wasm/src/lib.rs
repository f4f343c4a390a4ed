//! Route Progress (Leptos + WASM)
//!
//! ルーターの遷移中シグナルに合わせてNProgressのバーを表示するコンポーネント

pub mod bindings;
pub mod components;
pub mod timer;

#[cfg(feature = "demo")]
mod app;

pub use bindings::{detect_environment, NProgress};
pub use components::route_progress::RouteProgress;
pub use timer::GlooScheduler;

#[cfg(feature = "demo")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
