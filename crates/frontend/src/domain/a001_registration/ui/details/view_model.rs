use super::model::{self, ConsoleSubmissionSink, ObjectUrlProvider};
use crate::shared::components::ui::options_from_labels;
use contracts::domain::a001_registration::{FormField, RegistrationSession};
use contracts::enums::profession::Profession;
use leptos::prelude::*;
use web_sys::File;

pub type BrowserSession = RegistrationSession<File, ObjectUrlProvider>;

/// ViewModel for the registration page.
///
/// Holds the one page-session state. Browser `File`s are not `Send`, hence
/// the local signal.
#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub session: RwSignal<BrowserSession, LocalStorage>,
}

impl RegistrationViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(RegistrationSession::new(ObjectUrlProvider)),
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn selected_profession(&self) -> String {
        self.session.with(|s| s.selected_profession().to_string())
    }

    pub fn is_profession_selected(&self) -> bool {
        self.session.with(|s| s.is_profession_selected())
    }

    pub fn profession_options() -> Vec<(String, String)> {
        let labels: Vec<&str> = Profession::all().iter().map(|p| p.label()).collect();
        options_from_labels(&labels)
    }

    pub fn category_options(&self) -> Vec<(String, String)> {
        self.session.with(|s| options_from_labels(s.category_options()))
    }

    pub fn sub_category_options(&self) -> Vec<(String, String)> {
        self.session.with(|s| options_from_labels(s.sub_category_options()))
    }

    pub fn is_sub_category_enabled(&self) -> bool {
        self.session.with(|s| s.is_sub_category_enabled())
    }

    pub fn field(&self, field: FormField) -> String {
        self.session.with(|s| s.form().get(field).to_string())
    }

    pub fn preview_url(&self, index: usize) -> Option<String> {
        self.session.with(|s| s.images().preview(index).cloned())
    }

    pub fn has_image(&self, index: usize) -> bool {
        self.session.with(|s| s.images().file(index).is_some())
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn select_profession(&self, profession: String) {
        self.session.update(|s| s.set_profession(profession));
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.session.update(|s| s.set_field(field, value));
    }

    pub fn pick_image(&self, index: usize, ev: &web_sys::Event) {
        let file = model::picked_file(ev);
        self.session.update(|s| {
            if let Err(e) = s.set_image(index, file) {
                log::warn!("Image slot {}: {}", index, e);
            }
        });
    }

    pub fn remove_image(&self, index: usize) {
        self.session.update(|s| {
            if let Err(e) = s.clear_image(index) {
                log::warn!("Image slot {}: {}", index, e);
            }
        });
    }

    pub fn submit(&self, ev: leptos::ev::SubmitEvent) {
        ev.prevent_default();
        let receipt = self
            .session
            .with_untracked(|s| s.submit(&mut ConsoleSubmissionSink));
        model::show_acknowledgement(&receipt);
    }

    /// Release every preview; safe to call on an already disposed page.
    pub fn release_all(&self) {
        let _ = self.session.try_update_untracked(|s| s.release_all());
    }
}

impl Default for RegistrationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the page's registration view model.
pub fn use_registration() -> RegistrationViewModel {
    use_context::<RegistrationViewModel>()
        .expect("RegistrationViewModel not found. Provide it in App.")
}
