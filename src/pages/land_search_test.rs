use super::*;

#[test]
fn search_term_requires_non_whitespace_content() {
    assert_eq!(validate_search_term(""), None);
    assert_eq!(validate_search_term("   "), None);
    assert_eq!(validate_search_term(" Kigali "), Some("Kigali".to_owned()));
}

#[test]
fn summary_counts_without_filter_annotation_for_all() {
    assert_eq!(results_summary(4, VerificationFilter::All, 4), "4 records found");
}

#[test]
fn summary_is_singular_for_one_record() {
    assert_eq!(results_summary(1, VerificationFilter::All, 1), "1 record found");
}

#[test]
fn summary_appends_total_when_filtered() {
    assert_eq!(
        results_summary(2, VerificationFilter::Verified, 4),
        "2 records found (4 total)"
    );
    assert_eq!(
        results_summary(1, VerificationFilter::Unverified, 4),
        "1 record found (4 total)"
    );
}
