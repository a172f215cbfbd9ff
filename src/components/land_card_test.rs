use super::*;

#[test]
fn badge_reflects_verification_state() {
    assert_eq!(badge_label(true), "Verified");
    assert_eq!(badge_label(false), "Pending");
}

#[test]
fn badge_class_tracks_state() {
    assert_eq!(badge_class(true), "badge badge--verified");
    assert_eq!(badge_class(false), "badge badge--pending");
}
