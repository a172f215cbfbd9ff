use super::*;

#[test]
fn mismatched_confirmation_is_rejected_first() {
    assert_eq!(
        validate_registration("Abcdef1!", "Abcdef1?", 5),
        Err("Passwords do not match")
    );
}

#[test]
fn weak_passwords_are_rejected() {
    assert_eq!(validate_registration("abc", "abc", password::strength("abc")), Err("Please use a stronger password"));
}

#[test]
fn strong_matching_passwords_pass() {
    let pass = "Abcdef1!";
    assert_eq!(validate_registration(pass, pass, password::strength(pass)), Ok(()));
}

#[test]
fn threshold_password_passes_at_exactly_three_checks() {
    // Upper + lower + digit, short: scores 3.
    let pass = "Abc1";
    assert_eq!(password::strength(pass), 3);
    assert_eq!(validate_registration(pass, pass, 3), Ok(()));
}

#[test]
fn meter_width_scales_in_fifths() {
    assert_eq!(meter_width(0), "0%");
    assert_eq!(meter_width(3), "60%");
    assert_eq!(meter_width(5), "100%");
    assert_eq!(meter_width(9), "100%"); // clamped
}

#[test]
fn role_options_cover_all_roles() {
    let roles: Vec<Role> = role_options().iter().map(|(role, _)| *role).collect();
    assert_eq!(roles, vec![Role::Citizen, Role::Official, Role::Notary]);
}

#[test]
fn label_class_buckets_scores() {
    assert!(label_class(0).ends_with("--weak"));
    assert!(label_class(2).ends_with("--weak"));
    assert!(label_class(3).ends_with("--fair"));
    assert!(label_class(5).ends_with("--strong"));
}
