use super::*;

// ============================================================================
// Toast message helpers
// ============================================================================

#[test]
fn success_message_confirms_the_upload() {
    assert_eq!(upload_success_message(), "Uploaded file");
}

#[test]
fn failure_message_keeps_the_request_detail() {
    assert_eq!(
        upload_failure_message("upload request failed: 500 Internal Server Error"),
        "Unable to upload file. upload request failed: 500 Internal Server Error"
    );
}

#[test]
fn failure_message_surfaces_server_status_text_verbatim() {
    let message = upload_failure_message("upload request failed: 500 Server Error");
    assert!(message.starts_with("Unable to upload file."));
    assert!(message.contains("Server Error"));
}
