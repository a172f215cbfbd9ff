//! Status filtering and summary counts for the transaction history table.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{Transaction, TransactionStatus};

/// Status filter driven by the history page's filter chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Rejected,
}

impl StatusFilter {
    /// The four chips, in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::Completed, Self::Rejected];

    pub fn from_key(key: &str) -> Self {
        match key {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "rejected" => Self::Rejected,
            _ => Self::All,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    fn matches(self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Pending => tx.status == TransactionStatus::Pending,
            Self::Completed => tx.status == TransactionStatus::Completed,
            Self::Rejected => tx.status == TransactionStatus::Rejected,
        }
    }
}

/// Transactions matching the filter, in input order.
pub fn apply_status_filter(transactions: &[Transaction], filter: StatusFilter) -> Vec<Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Per-status counts for the summary footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub completed: usize,
    pub pending: usize,
    pub rejected: usize,
}

pub fn status_summary(transactions: &[Transaction]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for tx in transactions {
        match tx.status {
            TransactionStatus::Completed => summary.completed += 1,
            TransactionStatus::Pending => summary.pending += 1,
            TransactionStatus::Rejected => summary.rejected += 1,
        }
    }
    summary
}
