//! Filter/stats pipeline over land-record lists.
//!
//! DESIGN
//! ======
//! Pure derivations shared by the dashboard and search views: given a record
//! list and a verification filter, produce the matching subset (stable input
//! order, no mutation) and aggregate counts. Portfolio statistics tolerate
//! the fixtures' loosely typed numeric strings: separators are stripped
//! before summation and the average is guarded against empty input.

#[cfg(test)]
#[path = "lands_test.rs"]
mod lands_test;

use time::Date;

use crate::net::types::LandRecord;
use crate::util::currency::parse_amount;
use crate::util::dates::parse_iso_date;

/// Verification-state filter driven by the search page's `<select>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationFilter {
    #[default]
    All,
    Verified,
    Unverified,
}

impl VerificationFilter {
    /// Parse the `<select>` option value; unknown values mean no filtering.
    pub fn from_key(key: &str) -> Self {
        match key {
            "verified" => Self::Verified,
            "unverified" => Self::Unverified,
            _ => Self::All,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Verified => "verified",
            Self::Unverified => "unverified",
        }
    }

    fn matches(self, record: &LandRecord) -> bool {
        match self {
            Self::All => true,
            Self::Verified => record.verified,
            Self::Unverified => !record.verified,
        }
    }
}

/// Records matching the filter, in input order.
pub fn apply_filter(records: &[LandRecord], filter: VerificationFilter) -> Vec<LandRecord> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Aggregate verification counts for a record list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub verified: usize,
    pub unverified: usize,
}

/// Count records by verification state. `verified + unverified == total`
/// holds for every input; an empty list yields all zeros.
pub fn record_stats(records: &[LandRecord]) -> RecordStats {
    let total = records.len();
    let verified = records.iter().filter(|r| r.verified).count();
    RecordStats { total, verified, unverified: total - verified }
}

/// Derived portfolio numbers for the dashboard stat tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortfolioStats {
    /// Sum of estimated values in whole francs; unparsable values count as 0.
    pub total_value: i64,
    /// Rounded mean parcel area in square meters; 0 for an empty portfolio.
    pub average_area: i64,
    /// Records registered within the 7 days ending at `today`.
    pub recent_activity: usize,
}

/// Compute portfolio statistics.
///
/// `today` is passed in (rather than read ambiently) so the computation
/// stays pure; `None`, e.g. outside the browser, reports zero recent
/// activity.
pub fn portfolio_stats(records: &[LandRecord], today: Option<Date>) -> PortfolioStats {
    let total_value = records
        .iter()
        .map(|r| parse_amount(&r.estimated_value).unwrap_or(0))
        .sum();

    let average_area = if records.is_empty() {
        0
    } else {
        let area_sum: i64 = records.iter().map(|r| parse_area(&r.area)).sum();
        let count = i64::try_from(records.len()).unwrap_or(i64::MAX);
        rounded_mean(area_sum, count)
    };

    let recent_activity = today.map_or(0, |today| {
        records
            .iter()
            .filter_map(|r| parse_iso_date(&r.created_at))
            .filter(|created| (today - *created).whole_days() < 7)
            .count()
    });

    PortfolioStats { total_value, average_area, recent_activity }
}

fn parse_area(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn rounded_mean(sum: i64, count: i64) -> i64 {
    if count <= 0 {
        return 0;
    }
    // Round half up, matching the UI's displayed averages.
    (sum + count / 2) / count
}
