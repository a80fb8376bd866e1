use crate::domain::a001_registration::ui::details::{use_registration, RegistrationViewModel};
use crate::shared::components::ui::Select;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let vm = use_registration();
    let theme = use_theme();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__left">
                    <Select
                        id="profession"
                        value=Signal::derive(move || vm.selected_profession())
                        on_change=Callback::new(move |value: String| vm.select_profession(value))
                        options=Signal::derive(RegistrationViewModel::profession_options)
                        placeholder="Select Profession"
                    />
                </div>
                <h1 class="header__title">"Business Directory"</h1>
                <div class="header__actions">
                    // Theme switching is not offered yet; the control stays inert.
                    <button
                        class="button button--ghost"
                        aria-label="Toggle theme"
                        disabled=true
                        on:click=move |_| theme.toggle_theme()
                    >
                        {move || if theme.is_dark_mode.get() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
