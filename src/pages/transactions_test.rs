use super::*;

#[test]
fn every_kind_has_an_icon() {
    assert_eq!(kind_icon(TransactionKind::Registration), "📝");
    assert_eq!(kind_icon(TransactionKind::Transfer), "🔄");
    assert_eq!(kind_icon(TransactionKind::Verification), "✅");
}

#[test]
fn badge_class_tracks_status() {
    assert_eq!(status_badge_class(TransactionStatus::Completed), "badge badge--completed");
    assert_eq!(status_badge_class(TransactionStatus::Pending), "badge badge--pending");
    assert_eq!(status_badge_class(TransactionStatus::Rejected), "badge badge--rejected");
}

#[test]
fn showing_line_reports_filtered_and_total() {
    assert_eq!(showing_line(2, 4), "Showing 2 of 4 transactions");
}

#[test]
fn displaying_line_pluralizes() {
    assert_eq!(displaying_line(1), "Displaying 1 transaction");
    assert_eq!(displaying_line(3), "Displaying 3 transactions");
}

#[test]
fn empty_message_names_the_active_filter() {
    assert_eq!(empty_message(StatusFilter::All), "You don't have any transactions yet.");
    assert_eq!(empty_message(StatusFilter::Rejected), "No rejected transactions found.");
}
