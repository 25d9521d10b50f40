//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! organization list fetched at startup; the dependent division
//! dropdown reads from here instead of a global variable.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Department;

/// Organization data shared across the form components
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Departments with their divisions, in service order
    pub departments: Vec<Department>,
    /// True once the organization list has loaded; the department
    /// dropdown stays disabled until then
    pub org_loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the cached organization list and mark it loaded
pub fn store_set_departments(store: &AppStore, departments: Vec<Department>) {
    *store.departments().write() = departments;
    *store.org_loaded().write() = true;
}
