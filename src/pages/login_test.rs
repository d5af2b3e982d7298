use super::*;

#[test]
fn validate_sign_in_input_trims_both_fields() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", "  hunter2!  "),
        Ok(("user@example.com".to_owned(), "hunter2!".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_email() {
    assert_eq!(
        validate_sign_in_input("   ", "hunter2!"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_sign_in_input_requires_password() {
    assert_eq!(
        validate_sign_in_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}
