use chrono::TimeDelta;

use crate::core::{MIN_UNIT_MINUTES, ScrollViewport, minutes_to_delta, total_minutes};
use crate::core::time_unit::clamp_to_min_unit;
use crate::error::{TimelineError, TimelineResult};

use super::{ModifierKeys, ZoomBehavior};

/// Wheel delta reported for one notch of a standard mouse wheel.
pub const WHEEL_NOTCH_UNITS: f64 = 120.0;

/// Signed number of notches a wheel gesture zooms by.
///
/// Positive values zoom out (larger unit). Returns `None` for a zero delta.
pub fn resolve_zoom_factor(wheel_delta: f64) -> TimelineResult<Option<f64>> {
    if !wheel_delta.is_finite() {
        return Err(TimelineError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta == 0.0 {
        return Ok(None);
    }
    let notches = (wheel_delta.abs() / WHEEL_NOTCH_UNITS).max(1.0);
    Ok(Some(-wheel_delta.signum() * notches))
}

/// Translates a wheel gesture into the next preferred unit.
///
/// Coarse units move by `coarse_step_minutes` per notch, finer ones by the
/// minimum unit. The result never drops below the minimum unit.
pub fn resolve_zoomed_unit(
    actual_unit: TimeDelta,
    wheel_delta: f64,
    behavior: ZoomBehavior,
) -> TimelineResult<Option<TimeDelta>> {
    let Some(zoom_factor) = resolve_zoom_factor(wheel_delta)? else {
        return Ok(None);
    };

    let step_minutes = if total_minutes(actual_unit) > behavior.coarse_threshold_minutes {
        behavior.coarse_step_minutes * zoom_factor
    } else {
        MIN_UNIT_MINUTES * zoom_factor
    };
    let next = actual_unit
        .checked_add(&minutes_to_delta(step_minutes))
        .unwrap_or(TimeDelta::MAX);
    Ok(Some(clamp_to_min_unit(next)))
}

/// Scroll state and settings needed to route one wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelContext {
    pub zoom_enabled: bool,
    pub zoom: ZoomBehavior,
    pub actual_unit: TimeDelta,
    pub content_width: f64,
    pub viewport: ScrollViewport,
    pub scroll_step_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// The gesture requested a new preferred unit.
    Zoomed(TimeDelta),
    /// The gesture scrolled the viewport to a new horizontal offset.
    Scrolled { horizontal_offset: f64 },
    /// Nothing to do: the host may forward the event elsewhere.
    Ignored,
}

/// Routes a wheel event to zoom (modifier held) or to horizontal scrolling.
///
/// Scrolling only happens when the content is wider than the viewport.
pub fn route_wheel(
    context: WheelContext,
    wheel_delta: f64,
    modifiers: ModifierKeys,
) -> TimelineResult<WheelOutcome> {
    if context.zoom_enabled && context.zoom.modifier.matches(modifiers) {
        return Ok(
            match resolve_zoomed_unit(context.actual_unit, wheel_delta, context.zoom)? {
                Some(unit) => WheelOutcome::Zoomed(unit),
                None => WheelOutcome::Ignored,
            },
        );
    }

    if !wheel_delta.is_finite() {
        return Err(TimelineError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    let max_offset = context.content_width - context.viewport.width;
    if wheel_delta == 0.0 || max_offset <= 0.0 {
        return Ok(WheelOutcome::Ignored);
    }

    let step = if wheel_delta < 0.0 {
        context.scroll_step_px
    } else {
        -context.scroll_step_px
    };
    let horizontal_offset = (context.viewport.horizontal_offset + step).clamp(0.0, max_offset);
    if horizontal_offset == context.viewport.horizontal_offset {
        return Ok(WheelOutcome::Ignored);
    }
    Ok(WheelOutcome::Scrolled { horizontal_offset })
}
