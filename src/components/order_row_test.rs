use super::*;

// =============================================================
// can_request_refund
// =============================================================

#[test]
fn paid_and_shipped_orders_are_refundable() {
    assert!(can_request_refund("paid"));
    assert!(can_request_refund("shipped"));
}

#[test]
fn pending_and_refund_states_are_not_refundable() {
    assert!(!can_request_refund("pending"));
    assert!(!can_request_refund("refund_requested"));
    assert!(!can_request_refund("refunded"));
}

#[test]
fn unknown_statuses_are_not_refundable() {
    assert!(!can_request_refund("archived"));
    assert!(!can_request_refund(""));
}

// =============================================================
// status_label
// =============================================================

#[test]
fn status_label_capitalizes_simple_statuses() {
    assert_eq!(status_label("paid"), "Paid");
    assert_eq!(status_label("shipped"), "Shipped");
}

#[test]
fn status_label_replaces_underscores() {
    assert_eq!(status_label("refund_requested"), "Refund requested");
}

#[test]
fn status_label_handles_empty_input() {
    assert_eq!(status_label(""), "");
}
