//! Organization Select Component
//!
//! Cascading department → division dropdowns fed by the store.

use leptos::prelude::*;

use crate::org::divisions_for;
use crate::store::{use_app_store, AppStateStoreFields};

const DEPARTMENT_PLACEHOLDER: &str = "請選擇科室";
const DIVISION_PLACEHOLDER: &str = "請選擇股別";

/// Department and division selects; picking a department clears and
/// repopulates the division list
#[component]
pub fn OrgSelect(
    department: ReadSignal<String>,
    set_department: WriteSignal<String>,
    division: ReadSignal<String>,
    set_division: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();

    let departments = move || store.departments().get();
    let divisions = move || divisions_for(&store.departments().read(), &department.get()).to_vec();

    view! {
        <div class="org-select">
            <label>"科室"</label>
            <select
                prop:value=move || department.get()
                disabled=move || !store.org_loaded().get()
                on:change=move |ev| {
                    set_department.set(event_target_value(&ev));
                    // Old division no longer belongs to the new department
                    set_division.set(String::new());
                }
            >
                <option value="">{DEPARTMENT_PLACEHOLDER}</option>
                <For
                    each=departments
                    key=|dep| dep.name.clone()
                    children=move |dep| {
                        view! { <option value=dep.name.clone()>{dep.name.clone()}</option> }
                    }
                />
            </select>

            <label>"股別"</label>
            <select
                prop:value=move || division.get()
                disabled=move || divisions().is_empty()
                on:change=move |ev| set_division.set(event_target_value(&ev))
            >
                <option value="">{DIVISION_PLACEHOLDER}</option>
                <For
                    each=divisions
                    key=|div| div.name.clone()
                    children=move |div| {
                        view! { <option value=div.name.clone()>{div.name.clone()}</option> }
                    }
                />
            </select>
        </div>
    }
}
