use super::*;

#[test]
fn detail_passes_values_through() {
    assert_eq!(detail(Some("Clay Loam")), "Clay Loam");
}

#[test]
fn detail_dashes_missing_or_empty_values() {
    assert_eq!(detail(None), "—");
    assert_eq!(detail(Some("")), "—");
}

#[test]
fn status_text_distinguishes_pending_verification() {
    assert_eq!(status_text(true), "Verified");
    assert_eq!(status_text(false), "Pending Verification");
}
