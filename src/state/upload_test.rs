use super::*;

// =============================================================
// UploadPhase / UploadFormState
// =============================================================

#[test]
fn upload_phase_default_is_editing() {
    assert_eq!(UploadPhase::default(), UploadPhase::Editing);
}

#[test]
fn upload_form_state_default_is_empty_and_editable() {
    let state = UploadFormState::default();
    assert!(state.product_id.is_empty());
    assert!(state.file_name.is_none());
    assert!(state.can_submit());
}

#[test]
fn begin_submit_blocks_further_submits() {
    let mut state = UploadFormState::default();
    state.begin_submit();
    assert_eq!(state.phase, UploadPhase::Submitting);
    assert!(!state.can_submit());
}

#[test]
fn finish_submit_returns_to_editing() {
    let mut state = UploadFormState::default();
    state.begin_submit();
    state.finish_submit();
    assert_eq!(state.phase, UploadPhase::Editing);
    assert!(state.can_submit());
}

#[test]
fn finish_submit_preserves_field_values() {
    let mut state = UploadFormState {
        product_id: "1".to_owned(),
        file_name: Some("latte.png".to_owned()),
        phase: UploadPhase::Editing,
    };
    state.begin_submit();
    state.finish_submit();
    assert_eq!(state.product_id, "1");
    assert_eq!(state.file_name.as_deref(), Some("latte.png"));
}

// =============================================================
// validate_upload_input
// =============================================================

#[test]
fn validate_accepts_id_and_file_and_trims() {
    assert_eq!(validate_upload_input("  42  ", true), Ok("42".to_owned()));
}

#[test]
fn validate_rejects_empty_id() {
    let errors = validate_upload_input("", true).expect_err("empty id");
    assert_eq!(errors.product_id, Some(PRODUCT_ID_REQUIRED));
    assert_eq!(errors.file, None);
}

#[test]
fn validate_rejects_whitespace_only_id() {
    let errors = validate_upload_input("   ", true).expect_err("blank id");
    assert_eq!(errors.product_id, Some(PRODUCT_ID_REQUIRED));
}

#[test]
fn validate_rejects_missing_file() {
    let errors = validate_upload_input("42", false).expect_err("no file");
    assert_eq!(errors.product_id, None);
    assert_eq!(errors.file, Some(FILE_REQUIRED));
}

#[test]
fn validate_reports_both_missing_fields_at_once() {
    let errors = validate_upload_input("", false).expect_err("both missing");
    assert_eq!(errors.product_id, Some(PRODUCT_ID_REQUIRED));
    assert_eq!(errors.file, Some(FILE_REQUIRED));
    assert!(!errors.is_clear());
}

#[test]
fn field_errors_default_is_clear() {
    assert!(UploadFieldErrors::default().is_clear());
}
