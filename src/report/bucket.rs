//! Mapping transaction dates onto coarser time buckets.

use time::Date;

/// How wide the time buckets of a time-series report are.
///
/// Parsed leniently from a query parameter: anything that is not `daily` or
/// `weekly` falls back to [Granularity::Monthly].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per ISO week.
    Weekly,
    /// One bucket per calendar month. The default.
    Monthly,
}

impl Granularity {
    /// Parse an optional `period` query parameter, falling back to monthly
    /// for anything unrecognized.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("daily") => Granularity::Daily,
            Some("weekly") => Granularity::Weekly,
            _ => Granularity::Monthly,
        }
    }
}

/// The string key of the time bucket `date` falls into.
///
/// Keys are zero-padded (`2024-03-07`, `2024-W02`, `2024-03`) so that
/// within one granularity the lexicographic order of keys matches the
/// chronological order of the dates they cover.
///
/// Weekly keys pair the ISO week number with the ISO week-based year
/// (week 1 is the week containing the first Thursday of the year), so a
/// date like 2024-12-30 lands in `2025-W01` rather than producing a key
/// that sorts before the rest of its week.
pub fn bucket_key(date: Date, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily => format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month() as u8,
            date.day()
        ),
        Granularity::Weekly => {
            let (week_year, week, _) = date.to_iso_week_date();
            format!("{week_year:04}-W{week:02}")
        }
        Granularity::Monthly => format!("{:04}-{:02}", date.year(), date.month() as u8),
    }
}

#[cfg(test)]
mod bucket_tests {
    use time::macros::date;

    use super::{Granularity, bucket_key};

    #[test]
    fn daily_keys_use_full_dates() {
        assert_eq!(
            bucket_key(date!(2024 - 03 - 07), Granularity::Daily),
            "2024-03-07"
        );
    }

    #[test]
    fn monthly_keys_drop_the_day() {
        assert_eq!(
            bucket_key(date!(2024 - 03 - 07), Granularity::Monthly),
            "2024-03"
        );
    }

    #[test]
    fn weekly_keys_use_iso_week_numbers() {
        // 2024-01-04 is a Thursday in the first ISO week of 2024.
        assert_eq!(
            bucket_key(date!(2024 - 01 - 04), Granularity::Weekly),
            "2024-W01"
        );
    }

    #[test]
    fn weekly_keys_follow_the_iso_year_at_year_boundaries() {
        // 2024-12-30 is a Monday belonging to the first ISO week of 2025.
        assert_eq!(
            bucket_key(date!(2024 - 12 - 30), Granularity::Weekly),
            "2025-W01"
        );

        // 2021-01-01 is a Friday belonging to the last ISO week of 2020.
        assert_eq!(
            bucket_key(date!(2021 - 01 - 01), Granularity::Weekly),
            "2020-W53"
        );
    }

    #[test]
    fn unrecognized_period_falls_back_to_monthly() {
        assert_eq!(Granularity::from_param(None), Granularity::Monthly);
        assert_eq!(Granularity::from_param(Some("hourly")), Granularity::Monthly);
        assert_eq!(Granularity::from_param(Some("daily")), Granularity::Daily);
        assert_eq!(Granularity::from_param(Some("weekly")), Granularity::Weekly);
    }

    #[test]
    fn keys_are_non_decreasing_for_sorted_dates() {
        let dates = [
            date!(2020 - 12 - 31),
            date!(2021 - 01 - 01),
            date!(2021 - 01 - 04),
            date!(2021 - 06 - 15),
            date!(2024 - 12 - 28),
            date!(2024 - 12 - 30),
            date!(2025 - 01 - 02),
        ];

        for granularity in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            let keys: Vec<String> = dates
                .iter()
                .map(|&date| bucket_key(date, granularity))
                .collect();

            let mut sorted = keys.clone();
            sorted.sort();

            assert_eq!(keys, sorted, "keys out of order for {granularity:?}");
        }
    }
}
