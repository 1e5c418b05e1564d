use chrono::{DateTime, Months, Utc};
use core_types::Period;

/// Maps a period to the earliest creation time it still includes.
///
/// Months are subtracted on the calendar, so the day of month is clamped to the end of a
/// shorter target month (March 31 minus one month is the last day of February). The time
/// of day is kept. `Period::All` has no lower bound and yields `None`; so does a window
/// reaching back past the earliest representable date.
pub fn resolve_cutoff(period: Period, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let months = period.months()?;
    now.checked_sub_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn all_has_no_cutoff() {
        assert_eq!(resolve_cutoff(Period::All, at(2024, 3, 31)), None);
    }

    #[test]
    fn month_end_clamps_into_leap_february() {
        assert_eq!(
            resolve_cutoff(Period::OneMonth, at(2024, 3, 31)),
            Some(at(2024, 2, 29))
        );
    }

    #[rstest]
    #[case(Period::OneMonth, at(2023, 3, 31), at(2023, 2, 28))]
    #[case(Period::ThreeMonths, at(2024, 5, 31), at(2024, 2, 29))]
    #[case(Period::SixMonths, at(2024, 8, 31), at(2024, 2, 29))]
    #[case(Period::OneYear, at(2024, 2, 29), at(2023, 2, 28))]
    #[case(Period::ThreeMonths, at(2024, 1, 15), at(2023, 10, 15))]
    #[case(Period::SixMonths, at(2024, 6, 10), at(2023, 12, 10))]
    fn subtracts_calendar_months(
        #[case] period: Period,
        #[case] now: DateTime<Utc>,
        #[case] expected: DateTime<Utc>,
    ) {
        assert_eq!(resolve_cutoff(period, now), Some(expected));
    }

    #[test]
    fn keeps_time_of_day() {
        let now = Utc.with_ymd_and_hms(2024, 7, 4, 17, 45, 30).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 6, 4, 17, 45, 30).unwrap();
        assert_eq!(resolve_cutoff(Period::OneMonth, now), Some(expected));
    }

    #[test]
    fn underflow_means_unbounded() {
        assert_eq!(resolve_cutoff(Period::OneYear, DateTime::<Utc>::MIN_UTC), None);
    }
}
