use super::*;

#[test]
fn unread_count_ignores_read_items() {
    assert_eq!(unread_count(&fixture()), 2);
}

#[test]
fn unread_count_of_empty_list_is_zero() {
    assert_eq!(unread_count(&[]), 0);
}

#[test]
fn every_kind_has_an_icon_and_class() {
    for kind in [NotificationKind::Success, NotificationKind::Info, NotificationKind::Warning] {
        assert!(!kind_icon(kind).is_empty());
        assert!(kind_class(kind).starts_with("notification__icon--"));
    }
}

#[test]
fn fixture_ids_are_unique() {
    let items = fixture();
    let mut ids: Vec<u32> = items.iter().map(|n| n.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}
