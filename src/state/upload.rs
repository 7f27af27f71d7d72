//! Upload form state machine and required-field validation.
//!
//! DESIGN
//! ======
//! The form moves Editing -> Submitting -> Editing on every submission, with
//! both success and failure landing back in Editing. Keeping the phase as a
//! tagged enum (rather than ad-hoc boolean flags) lets the single-request
//! invariant live in one place: `can_submit`.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Inline feedback shown when the identifier field is empty.
pub const PRODUCT_ID_REQUIRED: &str = "Please provide a product ID.";

/// Inline feedback shown when no file has been selected.
pub const FILE_REQUIRED: &str = "Please select a file to upload.";

/// Submission lifecycle for the upload form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// Fields are editable and a submit may start.
    #[default]
    Editing,
    /// One request is in flight; further submits are ignored.
    Submitting,
}

/// Local state owned by the admin upload form.
///
/// `file_name` mirrors the file input's selection; the actual file handle
/// stays in the DOM and is read at submit time.
#[derive(Clone, Debug, Default)]
pub struct UploadFormState {
    pub product_id: String,
    pub file_name: Option<String>,
    pub phase: UploadPhase,
}

impl UploadFormState {
    /// Whether a submit (or field edit) is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.phase == UploadPhase::Editing
    }

    /// Enter the Submitting phase.
    pub fn begin_submit(&mut self) {
        self.phase = UploadPhase::Submitting;
    }

    /// Return to Editing once the request resolves, either way.
    pub fn finish_submit(&mut self) {
        self.phase = UploadPhase::Editing;
    }
}

/// Per-field validation feedback for a rejected submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadFieldErrors {
    pub product_id: Option<&'static str>,
    pub file: Option<&'static str>,
}

impl UploadFieldErrors {
    /// True when neither field has feedback to show.
    pub fn is_clear(&self) -> bool {
        self.product_id.is_none() && self.file.is_none()
    }
}

/// Check the required fields before any request is made.
///
/// Returns the trimmed identifier on success, or the inline feedback to
/// show for each missing field. A validation failure must never reach the
/// network.
///
/// # Errors
///
/// Returns `UploadFieldErrors` naming each missing required field.
pub fn validate_upload_input(product_id: &str, has_file: bool) -> Result<String, UploadFieldErrors> {
    let trimmed = product_id.trim();
    let errors = UploadFieldErrors {
        product_id: trimmed.is_empty().then_some(PRODUCT_ID_REQUIRED),
        file: (!has_file).then_some(FILE_REQUIRED),
    };
    if errors.is_clear() {
        Ok(trimmed.to_owned())
    } else {
        Err(errors)
    }
}
