//! Page-session state of the registration form.
//!
//! One [`RegistrationSession`] per page view: the selected profession, the
//! text fields and the image slots. All mutation goes through its methods so
//! preview handles are released on every path that discards them.

use super::aggregate::{FormField, RegistrationForm};
use super::error::RegistrationError;
use super::preview::{PreviewProvider, PreviewSlots};
use super::submission::{RegistrationRecord, SubmissionReceipt, SubmissionSink};
use super::taxonomy::{options_for, sub_options_for};
use crate::enums::profession::Profession;

pub struct RegistrationSession<F, P: PreviewProvider<F>> {
    selected_profession: String,
    form: RegistrationForm,
    images: PreviewSlots<F, P>,
}

impl<F, P: PreviewProvider<F>> RegistrationSession<F, P> {
    pub fn new(provider: P) -> Self {
        Self {
            selected_profession: String::new(),
            form: RegistrationForm::default(),
            images: PreviewSlots::new(provider),
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Raw value of the header dropdown; empty when nothing is chosen
    pub fn selected_profession(&self) -> &str {
        &self.selected_profession
    }

    pub fn profession(&self) -> Option<Profession> {
        Profession::from_label(&self.selected_profession)
    }

    /// The form is shown only once a profession is chosen
    pub fn is_profession_selected(&self) -> bool {
        !self.selected_profession.is_empty()
    }

    /// Select a profession (any value, empty included). Always starts a fresh
    /// form, even when the same profession is picked again.
    pub fn set_profession(&mut self, profession: impl Into<String>) {
        self.selected_profession = profession.into();
        self.images.release_all();
        self.form = RegistrationForm::default();
        log::debug!(
            "profession set to '{}', form reset",
            self.selected_profession
        );
    }

    pub fn category_options(&self) -> &'static [&'static str] {
        options_for(&self.selected_profession)
    }

    pub fn sub_category_options(&self) -> &'static [&'static str] {
        sub_options_for(&self.form.category)
    }

    /// Sub Category stays disabled until a category is chosen
    pub fn is_sub_category_enabled(&self) -> bool {
        !self.form.category.is_empty()
    }

    // ------------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------------

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), RegistrationError> {
        let field: FormField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------------

    pub fn images(&self) -> &PreviewSlots<F, P> {
        &self.images
    }

    pub fn set_image(&mut self, index: usize, file: Option<F>) -> Result<(), RegistrationError> {
        self.images.set_image(index, file)
    }

    pub fn clear_image(&mut self, index: usize) -> Result<(), RegistrationError> {
        self.images.clear_image(index)
    }

    /// Release every preview handle, e.g. when the page is torn down
    pub fn release_all(&mut self) {
        self.images.release_all();
    }

    // ------------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------------

    /// Snapshot of the form together with the selected profession
    pub fn to_record(&self) -> RegistrationRecord<F, P::Handle>
    where
        F: Clone,
        P::Handle: Clone,
    {
        let form = self.form.clone();
        RegistrationRecord {
            profession: self.selected_profession.clone(),
            category: form.category,
            sub_category: form.sub_category,
            name: form.name,
            address: form.address,
            experience: form.experience,
            phone: form.phone,
            images: self.images.images().map(|f| f.cloned()),
            image_preview_urls: self.images.preview_urls().map(|h| h.cloned()),
        }
    }

    /// Hand the current record to `sink` and acknowledge locally.
    ///
    /// The form is left as it is after submitting.
    pub fn submit<S>(&self, sink: &mut S) -> SubmissionReceipt
    where
        F: Clone,
        P::Handle: Clone,
        S: SubmissionSink<F, P::Handle> + ?Sized,
    {
        sink.accept(self.to_record());
        let receipt = SubmissionReceipt::new();
        log::info!(
            "registration {} submitted for '{}'",
            receipt.id,
            self.selected_profession
        );
        receipt
    }
}

#[cfg(test)]
mod tests {
    use super::super::preview::testing::{Event, FakeProvider};
    use super::super::submission::testing::RecordingSink;
    use super::*;

    type Session = RegistrationSession<&'static str, FakeProvider>;

    fn session() -> Session {
        RegistrationSession::new(FakeProvider::default())
    }

    fn fill(session: &mut Session) {
        session.set_field(FormField::Name, "Dana Cruz");
        session.set_field(FormField::Phone, "+1 555 0100");
        session.set_field(FormField::Address, "12 Elm Street\nSpringfield");
        session.set_field(FormField::Experience, "12");
    }

    #[test]
    fn test_initial_state_hides_form() {
        let session = session();

        assert!(!session.is_profession_selected());
        assert_eq!(session.profession(), None);
        assert!(session.category_options().is_empty());
        assert!(session.sub_category_options().is_empty());
        assert!(session.form().is_empty());
        assert!(session.images().is_empty());
    }

    #[test]
    fn test_set_profession_resets_form_and_releases_handles() {
        let mut session = session();
        session.set_profession("Engineer");
        fill(&mut session);
        session.set_field(FormField::Category, "Civil");
        session.set_image(0, Some("a.png")).unwrap();
        session.set_image(1, Some("b.png")).unwrap();

        session.set_profession("Engineer");

        assert_eq!(session.selected_profession(), "Engineer");
        assert_eq!(session.form(), &RegistrationForm::default());
        assert!(session.images().is_empty());
        assert_eq!(session.images().provider().releases(), vec![1, 2]);
    }

    #[test]
    fn test_unknown_profession_is_accepted_with_no_options() {
        let mut session = session();
        session.set_profession("Astronaut");

        assert!(session.is_profession_selected());
        assert_eq!(session.profession(), None);
        assert!(session.category_options().is_empty());

        session.set_profession("");
        assert!(!session.is_profession_selected());
    }

    #[test]
    fn test_category_change_keeps_stale_sub_category() {
        let mut session = session();
        session.set_profession("Doctor");
        session.set_field(FormField::Category, "Specialist");
        session.set_field(FormField::SubCategory, "Oncology");

        session.set_field(FormField::Category, "Surgeon");

        assert_eq!(session.form().sub_category, "Oncology");
        assert!(!session.sub_category_options().contains(&"Oncology"));
    }

    #[test]
    fn test_sub_category_enabled_follows_category() {
        let mut session = session();
        session.set_profession("Teacher");
        assert!(!session.is_sub_category_enabled());

        session.set_field(FormField::Category, "Higher Education");
        assert!(session.is_sub_category_enabled());

        session.set_field(FormField::Category, "");
        assert!(!session.is_sub_category_enabled());
    }

    #[test]
    fn test_set_field_by_name() {
        let mut session = session();
        session.set_field_by_name("subCategory", "Audit").unwrap();

        assert_eq!(session.form().sub_category, "Audit");
        assert_eq!(
            session.set_field_by_name("profession", "Doctor"),
            Err(RegistrationError::UnknownField("profession".to_string()))
        );
        assert_eq!(session.selected_profession(), "");
    }

    #[test]
    fn test_replacing_image_releases_before_second_create() {
        let mut session = session();
        session.set_profession("Designer");
        session.set_image(2, Some("first.png")).unwrap();
        session.set_image(2, Some("second.png")).unwrap();

        let log = session.images().provider().log.borrow().clone();
        let second_create = log
            .iter()
            .position(|e| *e == Event::Create("second.png", 2))
            .unwrap();
        let releases_before: Vec<&Event> = log[..second_create]
            .iter()
            .filter(|e| matches!(e, Event::Release(_)))
            .collect();
        assert_eq!(releases_before, vec![&Event::Release(1)]);
        assert_eq!(session.images().live_count(), 1);
        assert_eq!(session.images().file(2), Some(&"second.png"));
    }

    #[test]
    fn test_clear_empty_slot_changes_nothing() {
        let mut session = session();
        session.set_profession("Audit");
        session.set_image(0, Some("a.png")).unwrap();

        session.clear_image(1).unwrap();

        assert_eq!(session.images().file(0), Some(&"a.png"));
        assert!(session.images().provider().releases().is_empty());
    }

    #[test]
    fn test_profession_change_releases_each_handle_once() {
        let provider = FakeProvider::default();
        let log = provider.log.clone();
        let mut session = RegistrationSession::new(provider);
        session.set_profession("Lawyer");
        session.set_image(0, Some("a.png")).unwrap();
        session.set_image(1, Some("b.png")).unwrap();

        session.set_profession("Accountant");
        session.release_all();
        drop(session);

        let releases: Vec<Event> = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Release(_)))
            .cloned()
            .collect();
        assert_eq!(releases, vec![Event::Release(1), Event::Release(2)]);
    }

    #[test]
    fn test_doctor_specialist_submission() {
        let mut session = session();
        session.set_profession("Doctor");
        assert_eq!(
            session.category_options(),
            &["General Practitioner", "Specialist", "Surgeon"]
        );

        session.set_field(FormField::Category, "Specialist");
        assert_eq!(
            session.sub_category_options(),
            &[
                "Cardiology",
                "Neurology",
                "Dermatology",
                "Psychiatry",
                "Oncology",
                "Endocrinology"
            ]
        );
        session.set_field(FormField::SubCategory, "Neurology");
        fill(&mut session);
        session.set_image(3, Some("clinic.jpg")).unwrap();

        let mut sink = RecordingSink::default();
        let receipt = session.submit(&mut sink);

        assert_eq!(receipt.message, "Form submitted successfully!");
        assert_eq!(sink.records.len(), 1);
        let record = &sink.records[0];
        assert_eq!(record.profession, "Doctor");
        assert_eq!(record.category, "Specialist");
        assert_eq!(record.sub_category, "Neurology");
        assert_eq!(record.name, "Dana Cruz");
        assert_eq!(record.phone, "+1 555 0100");
        assert_eq!(record.address, "12 Elm Street\nSpringfield");
        assert_eq!(record.experience, "12");
        assert_eq!(record.images, [None, None, None, Some("clinic.jpg")]);
        assert_eq!(record.image_preview_urls, [None, None, None, Some(1)]);
    }

    #[test]
    fn test_submit_keeps_form_state() {
        let mut session = session();
        session.set_profession("Consultant");
        fill(&mut session);
        session.set_image(0, Some("a.png")).unwrap();

        let mut sink = RecordingSink::default();
        session.submit(&mut sink);
        session.submit(&mut sink);

        assert_eq!(sink.records.len(), 2);
        assert_eq!(sink.records[0], sink.records[1]);
        assert_eq!(session.form().name, "Dana Cruz");
        assert_eq!(session.images().live_count(), 1);
        assert!(session.images().provider().releases().is_empty());
    }
}
