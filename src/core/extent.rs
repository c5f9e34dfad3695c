use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::dates::LineRange;
use super::time_unit::rounded_unit_minutes;

/// Hard ceiling on the width of the scrollable content surface.
pub const MAX_CANVAS_SIZE: f64 = 16.0e6;

/// Horizontal size of the scrollable content surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Extent {
    /// No explicit width: the content follows the viewport.
    #[default]
    Unconstrained,
    /// Explicit width. `capped` is set when the requested unit would have
    /// overflowed `MAX_CANVAS_SIZE`.
    Fixed { width: f64, capped: bool },
}

impl Extent {
    #[must_use]
    pub fn width(self) -> Option<f64> {
        match self {
            Self::Unconstrained => None,
            Self::Fixed { width, .. } => Some(width),
        }
    }

    /// Whether the preferred unit must be ignored by graduation passes.
    #[must_use]
    pub fn invalidates_time_unit(self) -> bool {
        matches!(self, Self::Fixed { capped: true, .. })
    }

    /// Width of the laid-out content for a viewport of `viewport_width`.
    #[must_use]
    pub fn content_width(self, viewport_width: f64) -> f64 {
        self.width().unwrap_or_else(|| viewport_width.max(0.0))
    }
}

/// Computes the content width required to show `range` with one chunk of
/// `desired_chunk_size` pixels per `preferred_unit`.
#[must_use]
pub fn compute_extent(
    range: Option<LineRange>,
    preferred_unit: Option<TimeDelta>,
    desired_chunk_size: f64,
) -> Extent {
    let (Some(range), Some(unit)) = (range, preferred_unit) else {
        return Extent::Unconstrained;
    };

    let unit_minutes = rounded_unit_minutes(unit);
    let chunk_count = (range.span_minutes() / unit_minutes).max(1.0);
    let width = chunk_count * desired_chunk_size;
    if width > MAX_CANVAS_SIZE {
        Extent::Fixed {
            width: MAX_CANVAS_SIZE,
            capped: true,
        }
    } else {
        Extent::Fixed {
            width,
            capped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::{Extent, MAX_CANVAS_SIZE, compute_extent};
    use crate::core::dates::LineRange;

    fn day_at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|date| date.and_hms_opt(h, m, 0))
            .expect("valid date")
    }

    fn range(start: NaiveDateTime, end: NaiveDateTime) -> Option<LineRange> {
        LineRange::from_bounds(Some(start), Some(end))
    }

    #[test]
    fn missing_unit_or_range_is_unconstrained() {
        let active = range(day_at(1, 10, 0), day_at(1, 11, 0));
        assert_eq!(compute_extent(active, None, 60.0), Extent::Unconstrained);
        assert_eq!(
            compute_extent(None, Some(TimeDelta::minutes(5)), 60.0),
            Extent::Unconstrained
        );
    }

    #[test]
    fn width_is_chunk_count_times_chunk_size() {
        let active = range(day_at(1, 10, 0), day_at(1, 11, 0));
        let extent = compute_extent(active, Some(TimeDelta::minutes(15)), 80.0);
        assert_eq!(
            extent,
            Extent::Fixed {
                width: 320.0,
                capped: false
            }
        );
    }

    #[test]
    fn short_range_still_gets_one_chunk() {
        let active = range(day_at(1, 10, 0), day_at(1, 10, 5));
        let extent = compute_extent(active, Some(TimeDelta::hours(1)), 60.0);
        assert_eq!(extent.width(), Some(60.0));
    }

    #[test]
    fn unit_is_rounded_to_whole_minutes() {
        let active = range(day_at(1, 10, 0), day_at(1, 10, 10));
        let extent = compute_extent(active, Some(TimeDelta::seconds(20)), 60.0);
        assert_eq!(extent.width(), Some(600.0));
    }

    #[test]
    fn overflow_clamps_to_canvas_cap() {
        let active = range(day_at(1, 0, 0), day_at(31, 0, 0));
        let extent = compute_extent(active, Some(TimeDelta::minutes(1)), 500.0);
        assert_eq!(extent.width(), Some(MAX_CANVAS_SIZE));
        assert!(extent.invalidates_time_unit());
    }

    #[test]
    fn unconstrained_content_follows_viewport() {
        assert_eq!(Extent::Unconstrained.content_width(640.0), 640.0);
        assert_eq!(
            Extent::Fixed {
                width: 100.0,
                capped: false
            }
            .content_width(640.0),
            100.0
        );
    }
}
