//! UI Components
//!
//! Reusable Leptos components.

mod lunch_option_picker;
mod notice_banner;
mod org_select;
mod registration_form;
mod status_board;

pub use lunch_option_picker::LunchOptionPicker;
pub use notice_banner::NoticeBanner;
pub use org_select::OrgSelect;
pub use registration_form::RegistrationForm;
pub use status_board::StatusBoard;
