//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notice::{NoticeLevel, NoticeState, NOTICE_DISMISS_MS};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Banner state - read
    pub notices: ReadSignal<NoticeState>,
    /// Banner state - write
    set_notices: WriteSignal<NoticeState>,
}

impl AppContext {
    pub fn new(notices: (ReadSignal<NoticeState>, WriteSignal<NoticeState>)) -> Self {
        Self {
            notices: notices.0,
            set_notices: notices.1,
        }
    }

    /// Show a banner and schedule its auto-dismiss
    pub fn notify(&self, text: impl Into<String>, level: NoticeLevel) {
        let text = text.into();
        let mut generation = 0;
        self.set_notices.update(|state| generation = state.show(text, level));

        let set_notices = self.set_notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            set_notices.update(|state| state.expire(generation));
        });
    }

    pub fn notify_info(&self, text: impl Into<String>) {
        self.notify(text, NoticeLevel::Info);
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.notify(text, NoticeLevel::Error);
    }

    /// Drop any visible banner immediately
    pub fn clear_notice(&self) {
        self.set_notices.update(|state| state.clear());
    }
}
