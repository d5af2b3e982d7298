use super::*;

// Tests run against the thread-local fallback store; each test thread sees
// its own empty map, so no cross-test isolation is needed beyond
// `clear_session` at the start.

#[test]
fn token_round_trips() {
    clear_session();
    assert_eq!(load_token(), None);
    save_token("tok123");
    assert_eq!(load_token(), Some("tok123".to_owned()));
}

#[test]
fn user_json_round_trips() {
    clear_session();
    assert_eq!(load_user_json(), None);
    save_user_json(r#"{"id":"u2"}"#);
    assert_eq!(load_user_json(), Some(r#"{"id":"u2"}"#.to_owned()));
}

#[test]
fn save_token_overwrites_prior_value() {
    clear_session();
    save_token("first");
    save_token("second");
    assert_eq!(load_token(), Some("second".to_owned()));
}

#[test]
fn clear_session_removes_both_keys() {
    clear_session();
    save_token("tok123");
    save_user_json(r#"{"id":"u2"}"#);
    clear_session();
    assert_eq!(load_token(), None);
    assert_eq!(load_user_json(), None);
}

#[test]
fn clear_session_is_idempotent() {
    clear_session();
    clear_session();
    assert_eq!(load_token(), None);
    assert_eq!(load_user_json(), None);
}
