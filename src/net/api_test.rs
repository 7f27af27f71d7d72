use super::*;

#[test]
fn products_endpoint_appends_path_to_base() {
    assert_eq!(
        products_endpoint("http://localhost:9090"),
        "http://localhost:9090/products"
    );
}

#[test]
fn products_request_failed_message_formats_status_and_text() {
    assert_eq!(
        products_request_failed_message(503, "Service Unavailable"),
        "products request failed: 503 Service Unavailable"
    );
}

#[test]
fn upload_request_failed_message_carries_status_text_verbatim() {
    let message = upload_request_failed_message(500, "Server Error");
    assert_eq!(message, "upload request failed: 500 Server Error");
    assert!(message.contains("Server Error"));
}

#[test]
fn failed_messages_omit_empty_status_text() {
    // HTTP/2 responses carry no reason phrase.
    assert_eq!(products_request_failed_message(404, ""), "products request failed: 404");
    assert_eq!(upload_request_failed_message(500, ""), "upload request failed: 500");
}
