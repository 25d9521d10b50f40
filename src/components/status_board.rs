//! Status Board Component
//!
//! Supervisor view: accepted registrations with per-department
//! meat/vegetarian tallies. Refetches each time it is mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{LunchOption, RegistrationRow};

/// Per-department (meat, vegetarian) tallies, in first-seen order
pub fn summarize(rows: &[RegistrationRow]) -> Vec<(String, u32, u32)> {
    let mut summary: Vec<(String, u32, u32)> = Vec::new();
    for row in rows {
        let idx = match summary.iter().position(|(name, _, _)| *name == row.department_name) {
            Some(idx) => idx,
            None => {
                summary.push((row.department_name.clone(), 0, 0));
                summary.len() - 1
            }
        };
        match row.lunch_option {
            LunchOption::Meat => summary[idx].1 += 1,
            LunchOption::Vegetarian => summary[idx].2 += 1,
        }
    }
    summary
}

#[component]
pub fn StatusBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rows, set_rows) = signal(Vec::<RegistrationRow>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_registrations().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[STATUS] Loaded {} registrations", loaded.len()).into());
                    set_rows.set(loaded);
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("[STATUS] load failed: {}", message).into());
                    ctx.notify_error(format!("載入報名狀況失敗: {}", message));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="status-board">
            <h2>"報名狀況"</h2>
            {move || if loading.get() {
                view! { <p class="status-loading">"載入中..."</p> }.into_any()
            } else {
                let rows = rows.get();
                let summary = summarize(&rows);
                view! {
                    <div class="status-content">
                        <table class="status-summary">
                            <thead>
                                <tr><th>"科室"</th><th>"葷"</th><th>"素"</th></tr>
                            </thead>
                            <tbody>
                                {summary.into_iter().map(|(name, meat, vegetarian)| view! {
                                    <tr><td>{name}</td><td>{meat}</td><td>{vegetarian}</td></tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                        <ul class="status-rows">
                            {rows.into_iter().map(|row| view! {
                                <li>
                                    {format!(
                                        "{} {} / {} {}（{}）",
                                        row.department_name,
                                        row.division_name,
                                        row.employee_id,
                                        row.employee_name,
                                        row.lunch_option.label(),
                                    )}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }.into_any()
            }}
        </section>
    }
}
