//! Light / dark theme context.
//!
//! Purely cosmetic: nothing in the registration flow reads it. The preference
//! is persisted in localStorage and mirrored as `data-theme` on `<html>`.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme";

/// Load the dark-mode flag from localStorage.
fn load_dark_mode_from_storage() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| s == "dark")
        .unwrap_or(false)
}

fn theme_name(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "dark"
    } else {
        "light"
    }
}

/// Save and apply the theme to the document.
fn apply_theme(is_dark_mode: bool) {
    let name = theme_name(is_dark_mode);
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, name);
    }
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", name);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark_mode: RwSignal<bool>,
}

impl ThemeContext {
    pub fn toggle_theme(&self) {
        self.is_dark_mode.update(|dark| *dark = !*dark);
        apply_theme(self.is_dark_mode.get_untracked());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_dark_mode_from_storage();
    apply_theme(initial);

    provide_context(ThemeContext {
        is_dark_mode: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
