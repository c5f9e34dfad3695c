use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::dates::LineRange;
use super::time_unit::{MIN_UNIT_MINUTES, min_time_unit, minutes_to_delta, total_minutes};
use super::types::{LabelMetrics, ScrollViewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    Start,
    Interior,
    End,
}

/// One graduation on the axis, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub offset_px: f64,
    pub date: NaiveDateTime,
    pub kind: TickKind,
}

/// Horizontal axis segment drawn under the visible ticks, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub left_px: f64,
    pub width_px: f64,
}

/// Inputs of one graduation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationInput {
    pub range: Option<LineRange>,
    pub content_width: f64,
    pub viewport: ScrollViewport,
    pub preferred_unit: Option<TimeDelta>,
    pub invalid_time_unit: bool,
    pub labels: LabelMetrics,
}

/// Ticks and derived unit produced by one graduation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GraduationPlan {
    pub marks: Vec<TickMark>,
    pub actual_unit: TimeDelta,
    pub origin_x: f64,
    pub baseline: Baseline,
}

/// Computes the visible graduations of the axis.
///
/// Returns `None` when the range is inactive or the content has no width; the
/// caller keeps its previous actual unit in that case.
#[must_use]
pub fn compute_graduations(input: &GraduationInput) -> Option<GraduationPlan> {
    let range = input.range?;
    let size = input.content_width;
    if !size.is_finite() || size <= 0.0 {
        return None;
    }

    let chunk_size = input.labels.desired_chunk_size();
    let tolerance = input.labels.side_tolerance();
    let label_width = input.labels.label_width_px;
    let span = range.span_minutes();
    let chunk_count = (size / chunk_size).floor();

    let chunk_minutes = match input.preferred_unit {
        Some(unit) if !input.invalid_time_unit => total_minutes(unit),
        _ if chunk_count > 0.0 => (span / chunk_count).ceil(),
        // Without a whole chunk the only ticks are the two bounds.
        _ => span,
    }
    .max(MIN_UNIT_MINUTES);

    let actual_unit = if chunk_count > 0.0 {
        minutes_to_delta(chunk_minutes)
    } else {
        min_time_unit()
    };

    let origin_x = input.viewport.origin_x();
    let viewport_width = input.viewport.width.max(0.0);
    let baseline = resolve_baseline(origin_x, viewport_width, tolerance, size);

    let size_ratio = size / span;
    let (starting_minute, max_offset) = if origin_x < 0.0 {
        let target_begin = -(origin_x + tolerance);
        let target_minute = target_begin / size_ratio;
        (
            (target_minute / chunk_minutes).ceil() * chunk_minutes,
            target_begin.max(0.0) + viewport_width + tolerance,
        )
    } else {
        (0.0, viewport_width + tolerance)
    };

    let mut marks = Vec::with_capacity(2);
    marks.push(TickMark {
        offset_px: 0.0,
        date: range.start(),
        kind: TickKind::Start,
    });

    let mut current_minute = starting_minute.max(0.0);
    let mut offset = 0.0;
    while current_minute + chunk_minutes < span && offset < max_offset {
        current_minute += chunk_minutes;
        offset = current_minute.ceil() * size_ratio;
        // A label that would be clipped by the content edge is dropped but
        // still consumes its slot in the cadence.
        if offset + label_width > size || offset >= size {
            continue;
        }
        marks.push(TickMark {
            offset_px: offset,
            date: range.date_at_minutes(current_minute),
            kind: TickKind::Interior,
        });
    }

    marks.push(TickMark {
        offset_px: size,
        date: range.end(),
        kind: TickKind::End,
    });

    Some(GraduationPlan {
        marks,
        actual_unit,
        origin_x,
        baseline,
    })
}

fn resolve_baseline(origin_x: f64, viewport_width: f64, tolerance: f64, size: f64) -> Baseline {
    let left_px = (-origin_x).max(0.0);
    let mut width_px = viewport_width + tolerance;
    if width_px + left_px > size {
        width_px = (size - left_px).max(0.0);
    }
    Baseline { left_px, width_px }
}
