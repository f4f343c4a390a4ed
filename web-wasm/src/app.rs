//! デモアプリケーション

use crate::components::route_progress::RouteProgress;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use route_progress_common::WidgetOptions;

/// ボタンでページ遷移を模擬する
#[component]
pub fn App() -> impl IntoView {
    let (is_routing, set_is_routing) = signal(false);
    let (delay_ms, set_delay_ms) = signal(1200u32);

    let on_simulate = move |_| {
        set_is_routing.set(true);
        Timeout::new(delay_ms.get_untracked(), move || set_is_routing.set(false)).forget();
    };

    view! {
        <RouteProgress
            is_routing=is_routing
            color="#29d"
            options=WidgetOptions::default().with_spinner(false)
        />

        <div class="container">
            <h1>"Route Progress"</h1>

            <div class="form-group">
                <label for="delay">"遷移時間 (ms)"</label>
                <select
                    id="delay"
                    on:change=move |ev| {
                        let value: u32 = event_target_value(&ev).parse().unwrap_or(1200);
                        set_delay_ms.set(value);
                    }
                >
                    <option value="100">"100ms（バーがちらつかないこと）"</option>
                    <option value="1200" selected=true>"1200ms"</option>
                    <option value="4000">"4000ms"</option>
                </select>
            </div>

            <button class="btn btn-primary" on:click=on_simulate>
                "ページ遷移をシミュレート"
            </button>
            <button
                class="btn btn-secondary"
                on:click=move |_| set_is_routing.update(|routing| *routing = !*routing)
            >
                {move || if is_routing.get() { "遷移を終了" } else { "遷移を開始" }}
            </button>
        </div>
    }
}
