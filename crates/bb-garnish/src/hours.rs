use chrono::{Days, NaiveDateTime, TimeDelta};

use crate::restaurants::Interval;

/// An hour offset supplied by the caller. Parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(TimeDelta);

impl Default for Offset {
    fn default() -> Self {
        Self(TimeDelta::zero())
    }
}

impl Offset {
    pub fn hours(hours: i64) -> Self {
        TimeDelta::try_hours(hours).map(Self).unwrap_or_default()
    }

    /// Anything that is not a whole number of hours is treated as no offset.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(TimeDelta::try_hours)
            .map(Self)
            .unwrap_or_default()
    }

    fn shift(&self, instant: NaiveDateTime) -> NaiveDateTime {
        instant.checked_add_signed(self.0).unwrap_or(instant)
    }
}

/// Whether `now`, shifted by `offset`, falls strictly inside any of `intervals`.
///
/// An interval whose end hour is before its start hour ends on the following day.
// Intervals are anchored on the date of `now`; the offset never moves the anchor.
pub fn is_open_now(intervals: Option<&[Interval]>, offset: Offset, now: NaiveDateTime) -> bool {
    let Some(intervals) = intervals else {
        return false;
    };
    let shifted = offset.shift(now);
    let today = now.date();
    intervals.iter().any(|interval| {
        let start = today.and_time(interval.start.as_naive_time());
        let end_day = if interval.crosses_midnight() {
            match today.checked_add_days(Days::new(1)) {
                Some(tomorrow) => tomorrow,
                None => return false,
            }
        } else {
            today
        };
        let end = end_day.and_time(interval.end.as_naive_time());
        start < shifted && shifted < end
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::interval;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn open(hours: &[Interval], offset: Offset, now: NaiveDateTime) -> bool {
        is_open_now(Some(hours), offset, now)
    }

    #[test]
    fn offset_parses_whole_hours() {
        assert_eq!(Offset::parse("3"), Offset::hours(3));
        assert_eq!(Offset::parse(" -4 "), Offset::hours(-4));
        assert_eq!(Offset::parse("+2"), Offset::hours(2));
    }

    #[test]
    fn malformed_offset_is_zero() {
        assert_eq!(Offset::parse("abc"), Offset::parse("0"));
        assert_eq!(Offset::parse("1.5"), Offset::default());
        assert_eq!(Offset::parse(""), Offset::default());
        assert_eq!(Offset::parse("99999999999999999999"), Offset::default());
    }

    #[test]
    fn daytime_interval() {
        let hours = [interval((9, 0), (17, 0))];

        assert!(open(&hours, Offset::default(), at(5, 12, 0)));
        assert!(!open(&hours, Offset::default(), at(5, 18, 0)));
        assert!(!open(&hours, Offset::default(), at(5, 8, 59)));
    }

    #[test]
    fn boundaries_are_exclusive() {
        let hours = [interval((9, 0), (17, 0))];

        assert!(!open(&hours, Offset::default(), at(5, 9, 0)));
        assert!(!open(&hours, Offset::default(), at(5, 17, 0)));
    }

    #[test]
    fn overnight_interval_ends_next_day() {
        let hours = [interval((22, 0), (2, 0))];

        assert!(open(&hours, Offset::default(), at(5, 23, 30)));
        // 23:00 shifted by two hours lands on 01:00 of the following day.
        assert!(open(&hours, Offset::hours(2), at(5, 23, 0)));
        assert!(!open(&hours, Offset::default(), at(5, 12, 0)));
        assert!(!open(&hours, Offset::hours(4), at(5, 23, 0)));
    }

    #[test]
    fn early_morning_is_anchored_on_the_same_day() {
        // The interval starts at 22:00 today, so 01:00 today precedes it.
        let hours = [interval((22, 0), (2, 0))];
        assert!(!open(&hours, Offset::default(), at(5, 1, 0)));
    }

    #[test]
    fn offset_shifts_only_the_compared_instant() {
        let hours = [interval((9, 0), (17, 0))];

        assert!(open(&hours, Offset::hours(3), at(5, 7, 0)));
        assert!(open(&hours, Offset::hours(-3), at(5, 19, 0)));
        assert!(!open(&hours, Offset::hours(-3), at(5, 21, 0)));
    }

    #[test]
    fn malformed_offset_matches_zero_offset() {
        let hours = [interval((9, 0), (17, 0))];
        for now in [at(5, 8, 0), at(5, 12, 0), at(5, 18, 0)] {
            assert_eq!(
                open(&hours, Offset::parse("abc"), now),
                open(&hours, Offset::parse("0"), now),
            );
        }
    }

    #[test]
    fn any_interval_matches() {
        let hours = [interval((7, 0), (10, 0)), interval((16, 0), (21, 0))];

        assert!(open(&hours, Offset::default(), at(5, 8, 0)));
        assert!(open(&hours, Offset::default(), at(5, 20, 0)));
        assert!(!open(&hours, Offset::default(), at(5, 12, 0)));
    }

    #[test]
    fn overnight_at_month_end_rolls_into_next_month() {
        let hours = [interval((20, 0), (3, 0))];
        let last_day = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();

        assert!(open(&hours, Offset::hours(3), last_day));
    }

    #[test]
    fn missing_schedule_is_closed() {
        assert!(!is_open_now(None, Offset::default(), at(5, 12, 0)));
        assert!(!open(&[], Offset::default(), at(5, 12, 0)));
    }
}
