use crate::domain::a001_registration::ui::details::{RegistrationPage, RegistrationViewModel};
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One registration session per page view, shared by header and form.
    let registration = RegistrationViewModel::new();
    provide_context(registration);

    // Revoke every preview URL when the page goes away.
    on_cleanup(move || registration.release_all());

    view! {
        <ThemeProvider>
            <Shell>
                <RegistrationPage />
            </Shell>
        </ThemeProvider>
    }
}
