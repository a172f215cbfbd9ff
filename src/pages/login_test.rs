use super::*;

#[test]
fn plausible_emails_pass_the_shape_check() {
    assert!(is_plausible_email("demo@rwanda.gov.rw"));
    assert!(is_plausible_email("a@b.co"));
}

#[test]
fn implausible_emails_fail_the_shape_check() {
    assert!(!is_plausible_email(""));
    assert!(!is_plausible_email("no-at-sign"));
    assert!(!is_plausible_email("@missing-local.com"));
    assert!(!is_plausible_email("dotless@domain"));
    assert!(!is_plausible_email("spaces in@mail.com"));
    assert!(!is_plausible_email("trailing@dot."));
}

#[test]
fn validation_requires_both_fields() {
    assert_eq!(validate_credentials_input("", "password"), Err("Please fill in all fields"));
    assert_eq!(
        validate_credentials_input("demo@rwanda.gov.rw", ""),
        Err("Please fill in all fields")
    );
}

#[test]
fn validation_rejects_bad_email_shapes() {
    assert_eq!(
        validate_credentials_input("not-an-email", "password"),
        Err("Please enter a valid email address")
    );
}

#[test]
fn validation_trims_the_email() {
    assert_eq!(
        validate_credentials_input("  demo@rwanda.gov.rw  ", "password"),
        Ok(("demo@rwanda.gov.rw".to_owned(), "password".to_owned()))
    );
}
