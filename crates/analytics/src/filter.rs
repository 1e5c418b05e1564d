use crate::window::resolve_cutoff;
use chrono::{DateTime, Utc};
use core_types::{BacktestRecord, Period};
use std::cmp::Reverse;

/// Selects the records created inside the given window.
///
/// The result borrows from `records` and keeps their relative order. For `Period::All`
/// every record is returned.
pub fn filter_by_period(
    records: &[BacktestRecord],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<&BacktestRecord> {
    match resolve_cutoff(period, now) {
        None => records.iter().collect(),
        Some(cutoff) => records.iter().filter(|r| r.created_at >= cutoff).collect(),
    }
}

/// Orders records newest first. Records sharing a creation time keep their input order.
pub fn most_recent_first<'a>(records: &[&'a BacktestRecord]) -> Vec<&'a BacktestRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|r| Reverse(r.created_at));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record_created;
    use chrono::TimeZone;

    fn history() -> Vec<BacktestRecord> {
        vec![
            record_created(1, "AAPL", Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap()),
            record_created(2, "MSFT", Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()),
            record_created(3, "TSLA", Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()),
            record_created(4, "NVDA", Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 59).unwrap()),
            record_created(5, "AMZN", Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
        ]
    }

    fn ids(records: &[&BacktestRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn all_returns_every_record_in_order() {
        let records = history();
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        let filtered = filter_by_period(&records, Period::All, now);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let records = history();
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        let filtered = filter_by_period(&records, Period::OneMonth, now);
        // Cutoff is 2024-02-29T00:00:00, so record 3 sits exactly on the boundary.
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn wider_windows_keep_input_order() {
        let records = history();
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(ids(&filter_by_period(&records, Period::ThreeMonths, now)), vec![1, 3, 4, 5]);
        assert_eq!(ids(&filter_by_period(&records, Period::OneYear, now)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn output_is_a_subsequence_for_every_period() {
        let records = history();
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        for period in Period::ALL {
            let filtered = filter_by_period(&records, period, now);
            let mut remaining = records.iter();
            for kept in filtered {
                assert!(remaining.any(|r| std::ptr::eq(r, kept)), "{period} reordered records");
            }
        }
    }

    #[test]
    fn empty_history_stays_empty() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        for period in Period::ALL {
            assert!(filter_by_period(&[], period, now).is_empty());
        }
    }

    #[test]
    fn most_recent_first_is_stable() {
        let mut records = history();
        records.push(record_created(6, "META", Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap()));
        let all: Vec<&BacktestRecord> = records.iter().collect();
        assert_eq!(ids(&most_recent_first(&all)), vec![1, 6, 3, 4, 5, 2]);
    }
}
