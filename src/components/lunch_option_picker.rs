//! Lunch Option Picker Component
//!
//! Meal-type choice buttons for the registration form.

use leptos::prelude::*;

use crate::models::LunchOption;

/// Meal options offered on the form
pub const LUNCH_OPTIONS: &[(LunchOption, &str)] = &[
    (LunchOption::Meat, "葷食"),
    (LunchOption::Vegetarian, "素食"),
];

/// Meal choice buttons, at most one active
#[component]
pub fn LunchOptionPicker(
    selected: ReadSignal<Option<LunchOption>>,
    set_selected: WriteSignal<Option<LunchOption>>,
) -> impl IntoView {
    view! {
        <div class="lunch-options">
            {LUNCH_OPTIONS.iter().map(|(option, label)| {
                let option = *option;
                let is_selected = move || selected.get() == Some(option);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "option-btn active" } else { "option-btn" }
                        on:click=move |_| set_selected.set(Some(option))
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
