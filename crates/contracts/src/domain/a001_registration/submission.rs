//! Packaging of a submitted registration and the sink it is handed to.

use super::preview::IMAGE_SLOT_COUNT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Acknowledgement shown to the user once the sink has accepted a record
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Everything the form holds at submit time, files and preview handles
/// included as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord<F, H> {
    pub profession: String,
    pub category: String,
    pub sub_category: String,
    pub name: String,
    pub address: String,
    pub experience: String,
    pub phone: String,
    pub images: [Option<F>; IMAGE_SLOT_COUNT],
    pub image_preview_urls: [Option<H>; IMAGE_SLOT_COUNT],
}

impl<F, H> RegistrationRecord<F, H> {
    /// Convert the file references, e.g. into file names for logging
    pub fn map_images<G>(self, mut f: impl FnMut(F) -> G) -> RegistrationRecord<G, H> {
        RegistrationRecord {
            profession: self.profession,
            category: self.category,
            sub_category: self.sub_category,
            name: self.name,
            address: self.address,
            experience: self.experience,
            phone: self.phone,
            images: self.images.map(|image| image.map(&mut f)),
            image_preview_urls: self.image_preview_urls,
        }
    }
}

/// Receiver of submitted registrations. Fire-and-forget: the caller does not
/// wait for or inspect any outcome.
pub trait SubmissionSink<F, H> {
    fn accept(&mut self, record: RegistrationRecord<F, H>);
}

/// Local acknowledgement of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RegistrationRecord<&'static str, u32> {
        RegistrationRecord {
            profession: "Lawyer".into(),
            category: "Family Law".into(),
            sub_category: "Adoption".into(),
            name: "Ann Lee".into(),
            address: "1 Main St".into(),
            experience: "7".into(),
            phone: "555-0100".into(),
            images: [Some("a.png"), None, None, Some("d.jpg")],
            image_preview_urls: [Some(1), None, None, Some(2)],
        }
    }

    #[test]
    fn test_map_images_keeps_positions() {
        let mapped = record().map_images(|f| f.len());

        assert_eq!(mapped.images, [Some(5), None, None, Some(5)]);
        assert_eq!(mapped.image_preview_urls, [Some(1), None, None, Some(2)]);
        assert_eq!(mapped.sub_category, "Adoption");
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["profession"], "Lawyer");
        assert_eq!(json["subCategory"], "Adoption");
        assert_eq!(json["images"][0], "a.png");
        assert!(json["images"][1].is_null());
        assert_eq!(json["imagePreviewUrls"][3], 2);
    }

    #[test]
    fn test_receipt_carries_success_message() {
        let first = SubmissionReceipt::new();
        let second = SubmissionReceipt::new();

        assert_eq!(first.message, "Form submitted successfully!");
        assert_ne!(first.id, second.id);
        assert!(second.submitted_at >= first.submitted_at);
    }
}
