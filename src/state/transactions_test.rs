use super::*;
use crate::net::types::TransactionKind;

fn tx(id: u32, status: TransactionStatus) -> Transaction {
    Transaction {
        id,
        kind: TransactionKind::Transfer,
        land_title: format!("TL00123{id}"),
        from_party: "John Doe".to_owned(),
        to_party: "Jane Smith".to_owned(),
        date: "2024-01-15".to_owned(),
        status,
        amount: "50,000 RWF".to_owned(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, TransactionStatus::Completed),
        tx(2, TransactionStatus::Pending),
        tx(3, TransactionStatus::Completed),
        tx(4, TransactionStatus::Rejected),
    ]
}

#[test]
fn all_filter_keeps_everything() {
    assert_eq!(apply_status_filter(&sample(), StatusFilter::All).len(), 4);
}

#[test]
fn status_filters_select_matching_rows_in_order() {
    let completed = apply_status_filter(&sample(), StatusFilter::Completed);
    assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

    let rejected = apply_status_filter(&sample(), StatusFilter::Rejected);
    assert_eq!(rejected.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4]);
}

#[test]
fn filter_key_round_trips_and_defaults_to_all() {
    for filter in StatusFilter::ALL {
        assert_eq!(StatusFilter::from_key(filter.as_key()), filter);
    }
    assert_eq!(StatusFilter::from_key("archived"), StatusFilter::All);
}

#[test]
fn summary_counts_partition_by_status() {
    let summary = status_summary(&sample());
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.completed + summary.pending + summary.rejected, sample().len());
}

#[test]
fn empty_history_yields_zero_summary() {
    assert_eq!(status_summary(&[]), StatusSummary::default());
}
