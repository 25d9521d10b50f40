//! Registration Form Component
//!
//! The lunch sign-up form: employee fields, cascading org selects,
//! meal choice, and the submit flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LunchOptionPicker, OrgSelect};
use crate::context::AppContext;
use crate::models::LunchOption;
use crate::registration::{validate, FormFields};

/// Registration form; the submit button is disabled while a request
/// is in flight so a second submit cannot race the first
#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (employee_id, set_employee_id) = signal(String::new());
    let (employee_name, set_employee_name) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (division, set_division) = signal(String::new());
    let (lunch_option, set_lunch_option) = signal::<Option<LunchOption>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        ctx.clear_notice();

        let fields = FormFields {
            employee_id: employee_id.get(),
            employee_name: employee_name.get(),
            department_name: department.get(),
            division_name: division.get(),
            lunch_option: lunch_option.get(),
        };

        // Fail fast on blank fields, before any network traffic
        let record = match validate(&fields) {
            Ok(record) => record,
            Err(message) => {
                ctx.notify_error(message);
                set_submitting.set(false);
                return;
            }
        };

        spawn_local(async move {
            match api::submit_registration(&record).await {
                Ok(message) => {
                    ctx.notify_info(message);
                    set_division.set(String::new());
                    set_lunch_option.set(None);
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("[FORM] submit failed: {}", message).into());
                    ctx.notify_error(format!("報名失敗: {}", message));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="registration-form" on:submit=on_submit>
            <label>"員工編號"</label>
            <input
                type="text"
                placeholder="員工編號"
                prop:value=move || employee_id.get()
                on:input=move |ev| set_employee_id.set(event_target_value(&ev))
            />

            <label>"姓名"</label>
            <input
                type="text"
                placeholder="姓名"
                prop:value=move || employee_name.get()
                on:input=move |ev| set_employee_name.set(event_target_value(&ev))
            />

            <OrgSelect
                department=department
                set_department=set_department
                division=division
                set_division=set_division
            />

            <LunchOptionPicker selected=lunch_option set_selected=set_lunch_option />

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "報名中..." } else { "送出報名" }}
            </button>
        </form>
    }
}
