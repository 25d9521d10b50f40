//! Notice Banner Component
//!
//! Transient success/error banner; AppContext auto-dismisses it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::notice::NoticeLevel;

/// Banner showing the current notice, hidden when there is none
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.notices.get().current().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice info",
                NoticeLevel::Error => "notice error",
            };
            let text = notice.text.clone();
            view! { <p class=class>{text}</p> }
        })
    }
}
