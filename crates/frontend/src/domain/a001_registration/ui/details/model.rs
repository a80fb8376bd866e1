use contracts::domain::a001_registration::{
    PreviewError, PreviewProvider, RegistrationRecord, SubmissionReceipt, SubmissionSink,
};
use wasm_bindgen::JsCast;
use web_sys::{File, Url};

/// Preview handles backed by `URL.createObjectURL` / `URL.revokeObjectURL`
#[derive(Debug, Default)]
pub struct ObjectUrlProvider;

impl PreviewProvider<File> for ObjectUrlProvider {
    type Handle = String;

    fn create(&mut self, file: &File) -> Result<String, PreviewError> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| PreviewError(format!("Failed to create object URL: {:?}", e)))
    }

    fn release(&mut self, handle: String) {
        if let Err(e) = Url::revoke_object_url(&handle) {
            log::warn!("Failed to revoke object URL {}: {:?}", handle, e);
        }
    }
}

/// Logs submitted registrations to the browser console
#[derive(Debug, Default)]
pub struct ConsoleSubmissionSink;

impl SubmissionSink<File, String> for ConsoleSubmissionSink {
    fn accept(&mut self, record: RegistrationRecord<File, String>) {
        let loggable = record.map_images(|file| file.name());
        match serde_json::to_string_pretty(&loggable) {
            Ok(json) => log::info!("Form submitted: {}", json),
            Err(e) => log::warn!("Form submitted, record not serializable: {}", e),
        }
    }
}

/// First file of the `<input type="file">` that fired `ev`
pub fn picked_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Blocking acknowledgement dialog
pub fn show_acknowledgement(receipt: &SubmissionReceipt) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&receipt.message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
