use super::*;

#[test]
fn validate_sign_up_input_trims_all_fields() {
    assert_eq!(
        validate_sign_up_input(" Vera ", " vera@example.com ", " longenough "),
        Ok((
            "Vera".to_owned(),
            "vera@example.com".to_owned(),
            "longenough".to_owned()
        ))
    );
}

#[test]
fn validate_sign_up_input_requires_every_field() {
    assert_eq!(
        validate_sign_up_input("", "vera@example.com", "longenough"),
        Err("Fill in name, email, and password.")
    );
    assert_eq!(
        validate_sign_up_input("Vera", "   ", "longenough"),
        Err("Fill in name, email, and password.")
    );
    assert_eq!(
        validate_sign_up_input("Vera", "vera@example.com", ""),
        Err("Fill in name, email, and password.")
    );
}

#[test]
fn validate_sign_up_input_rejects_short_passwords() {
    assert_eq!(
        validate_sign_up_input("Vera", "vera@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_sign_up_input_accepts_exact_minimum_length() {
    assert!(validate_sign_up_input("Vera", "vera@example.com", "12345678").is_ok());
}
