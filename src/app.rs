//! Lunch Registration App
//!
//! Root component: provides context/store, loads the organization
//! list on mount, toggles between the form and the status view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{NoticeBanner, RegistrationForm, StatusBoard};
use crate::context::AppContext;
use crate::notice::NoticeState;
use crate::store::{store_set_departments, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (notices, set_notices) = signal(NoticeState::default());
    let (show_status, set_show_status) = signal(false);

    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new((notices, set_notices));
    provide_context(ctx);

    // Load departments and divisions on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_departments().await {
                Ok(departments) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} departments", departments.len()).into());
                    store_set_departments(&store, departments);
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("[APP] org load failed: {}", message).into());
                    ctx.notify_error(format!("載入科室股別失敗: {}", message));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <h1>"員工便當報名"</h1>

            <button
                class="toggle-view-btn"
                on:click=move |_| set_show_status.update(|v| *v = !*v)
            >
                {move || if show_status.get() { "返回報名表單" } else { "查看報名狀況" }}
            </button>

            <NoticeBanner />

            {move || if show_status.get() {
                view! { <StatusBoard /> }.into_any()
            } else {
                view! { <RegistrationForm /> }.into_any()
            }}
        </div>
    }
}
