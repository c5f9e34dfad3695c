use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use super::time_unit::{minutes_to_delta, total_minutes};

/// Largest date not after `date` that has no seconds.
#[must_use]
pub fn floor_date(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0)
        .and_then(|truncated| truncated.with_second(0))
        .unwrap_or(date)
}

/// Smallest date not before `date` that has no seconds.
///
/// Saturates at `date` when the next whole minute is not representable.
#[must_use]
pub fn ceiling_date(date: NaiveDateTime) -> NaiveDateTime {
    if date.second() == 0 && date.nanosecond() == 0 {
        return date;
    }
    floor_date(date)
        .checked_add_signed(TimeDelta::minutes(1))
        .unwrap_or(date)
}

/// Normalized, non-empty span covered by the axis line.
///
/// Both bounds are whole minutes and `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl LineRange {
    /// Builds the line range for an axis whose bounds may still be unset.
    ///
    /// Returns `None` (inactive layout) when either bound is missing or
    /// `start >= end`.
    #[must_use]
    pub fn from_bounds(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<Self> {
        let (start, end) = (start?, end?);
        if start >= end {
            return None;
        }
        let start = floor_date(start);
        let end = ceiling_date(end);
        if start >= end {
            return None;
        }
        Some(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn span_minutes(self) -> f64 {
        total_minutes(self.end - self.start)
    }

    #[must_use]
    pub fn minutes_from_start(self, date: NaiveDateTime) -> f64 {
        total_minutes(date.signed_duration_since(self.start))
    }

    #[must_use]
    pub fn contains(self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }

    /// Date located `minutes` after the line start, saturating at the line end.
    #[must_use]
    pub fn date_at_minutes(self, minutes: f64) -> NaiveDateTime {
        self.start
            .checked_add_signed(minutes_to_delta(minutes))
            .unwrap_or(self.end)
    }

    /// Pixel offset of `date` on a content surface of `content_width`.
    #[must_use]
    pub fn offset_for(self, date: NaiveDateTime, content_width: f64) -> f64 {
        self.minutes_from_start(date) * content_width / self.span_minutes()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{LineRange, ceiling_date, floor_date};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|day| day.and_hms_opt(h, m, s))
            .expect("valid date")
    }

    #[test]
    fn floor_drops_seconds_and_fractions() {
        let date = at(10, 0, 3) + chrono::TimeDelta::milliseconds(250);
        assert_eq!(floor_date(date), at(10, 0, 0));
    }

    #[test]
    fn ceiling_keeps_whole_minutes() {
        assert_eq!(ceiling_date(at(10, 5, 0)), at(10, 5, 0));
        assert_eq!(ceiling_date(at(10, 5, 1)), at(10, 6, 0));
    }

    #[test]
    fn ceiling_rounds_up_sub_second_remainders() {
        let date = at(10, 5, 0) + chrono::TimeDelta::milliseconds(1);
        assert_eq!(ceiling_date(date), at(10, 6, 0));
    }

    #[test]
    fn line_range_normalizes_bounds() {
        let range = LineRange::from_bounds(Some(at(10, 0, 3)), Some(at(10, 5, 0)))
            .expect("active range");
        assert_eq!(range.start(), at(10, 0, 0));
        assert_eq!(range.end(), at(10, 5, 0));
        assert_eq!(range.span_minutes(), 5.0);
    }

    #[test]
    fn line_range_is_inactive_for_missing_or_inverted_bounds() {
        assert!(LineRange::from_bounds(None, Some(at(10, 0, 0))).is_none());
        assert!(LineRange::from_bounds(Some(at(10, 0, 0)), None).is_none());
        assert!(LineRange::from_bounds(Some(at(10, 0, 0)), Some(at(10, 0, 0))).is_none());
        assert!(LineRange::from_bounds(Some(at(11, 0, 0)), Some(at(10, 0, 0))).is_none());
    }

    #[test]
    fn sub_minute_range_expands_to_one_minute() {
        let range = LineRange::from_bounds(Some(at(10, 0, 10)), Some(at(10, 0, 20)))
            .expect("active range");
        assert_eq!(range.span_minutes(), 1.0);
    }

    #[test]
    fn offsets_are_proportional() {
        let range = LineRange::from_bounds(Some(at(10, 0, 0)), Some(at(10, 10, 0)))
            .expect("active range");
        assert_eq!(range.offset_for(at(10, 2, 0), 100.0), 20.0);
        assert_eq!(range.date_at_minutes(4.0), at(10, 4, 0));
    }
}
