use super::*;

#[test]
fn page_endpoint_formats_expected_path() {
    assert_eq!(page_endpoint("privacy"), "/api/pages/privacy");
}

#[test]
fn refund_endpoint_formats_expected_path() {
    assert_eq!(refund_endpoint("o-42"), "/api/orders/o-42/refund");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(401), "sign in failed: 401");
}

#[test]
fn sign_up_failed_message_formats_status() {
    assert_eq!(sign_up_failed_message(409), "sign up failed: 409");
}

#[test]
fn refund_failed_message_formats_status() {
    assert_eq!(refund_failed_message(422), "refund request failed: 422");
}

#[test]
fn profile_update_failed_message_formats_status() {
    assert_eq!(profile_update_failed_message(400), "profile update failed: 400");
}
