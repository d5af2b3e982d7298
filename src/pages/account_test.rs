use super::*;

#[test]
fn validate_profile_input_trims_name() {
    assert_eq!(validate_profile_input("  Vera K.  "), Ok("Vera K.".to_owned()));
}

#[test]
fn validate_profile_input_requires_name() {
    assert_eq!(validate_profile_input("   "), Err("Enter a display name."));
    assert_eq!(validate_profile_input(""), Err("Enter a display name."));
}
