//! Registration Details UI Module
//!
//! MVVM split:
//! - model.rs: browser collaborators (object URLs, console sink, alert)
//! - view_model.rs: page-session state and commands
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::{RegistrationPage, RegistrationPlaceholder};
pub use view_model::{use_registration, RegistrationViewModel};
