//! Business directory registration form.
//!
//! - taxonomy.rs: Profession → Category → Sub Category tables
//! - aggregate.rs: form fields and the text record
//! - preview.rs: image slots and preview handle lifecycle
//! - submission.rs: submitted record, sink and receipt
//! - session.rs: page-session controller tying the above together

pub mod aggregate;
pub mod error;
pub mod preview;
pub mod session;
pub mod submission;
pub mod taxonomy;

pub use aggregate::{FormField, RegistrationForm};
pub use error::{PreviewError, RegistrationError};
pub use preview::{ImageSlot, PreviewProvider, PreviewSlots, IMAGE_SLOT_COUNT};
pub use session::RegistrationSession;
pub use submission::{
    RegistrationRecord, SubmissionReceipt, SubmissionSink, SUBMIT_SUCCESS_MESSAGE,
};
pub use taxonomy::{options_for, sub_options_for};
