//! Timezone-local calendar-day keys.
//!
//! Every day-boundary decision in the crate goes through this module. The key
//! is the calendar date in the instant's own offset, never a UTC date: two
//! instants in the same local day map to the same key, and instants either
//! side of local midnight must not.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Calendar-day key for an instant, in that instant's timezone.
pub fn day_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Today's key in the machine-local timezone.
pub fn today() -> NaiveDate {
    day_key(&Local::now())
}

/// A cached record is stale once the wall clock has crossed into a new
/// local day.
pub fn is_stale(cached: NaiveDate) -> bool {
    cached != today()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn at(offset_hours: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
    }

    #[test]
    fn stable_within_one_local_day() {
        for offset in [-11, -8, 0, 5, 13] {
            let morning = at(offset, 2026, 3, 14, 0, 1);
            let night = at(offset, 2026, 3, 14, 23, 59);
            assert_eq!(day_key(&morning), day_key(&night), "offset {offset}");
        }
    }

    #[test]
    fn changes_across_local_midnight() {
        for offset in [-11, -8, 0, 5, 13] {
            let before = at(offset, 2026, 3, 14, 23, 59);
            let after = at(offset, 2026, 3, 15, 0, 1);
            assert_ne!(day_key(&before), day_key(&after), "offset {offset}");
        }
    }

    #[test]
    fn key_is_local_not_utc() {
        // 23:30 at UTC-8 is already the next day in UTC; the key must stay on
        // the local date.
        let instant = at(-8, 2026, 3, 14, 23, 30);
        assert_eq!(day_key(&instant), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(instant.naive_utc().date(), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn formats_zero_padded() {
        let instant = at(0, 2026, 1, 5, 12, 0);
        assert_eq!(day_key(&instant).to_string(), "2026-01-05");
    }

    #[test]
    fn today_is_never_stale() {
        assert!(!is_stale(today()));
        assert!(is_stale(today().pred_opt().unwrap()));
    }
}
