use chrono::TimeDelta;

use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomBehavior;

use super::label_formatter::validate_date_format;
use super::{TimelineConfig, TimelineStyle};

pub(super) fn validate_time_unit(unit: Option<TimeDelta>) -> TimelineResult<Option<TimeDelta>> {
    match unit {
        Some(unit) if unit <= TimeDelta::zero() => Err(TimelineError::InvalidData(
            "time unit must be > 0".to_owned(),
        )),
        other => Ok(other),
    }
}

pub(super) fn validate_event_duration(
    duration: Option<TimeDelta>,
) -> TimelineResult<Option<TimeDelta>> {
    match duration {
        Some(duration) if duration < TimeDelta::zero() => Err(TimelineError::InvalidData(
            "event duration must be >= 0".to_owned(),
        )),
        other => Ok(other),
    }
}

pub(super) fn validate_font_size(font_size_px: f64) -> TimelineResult<f64> {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "label font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(font_size_px)
}

pub(super) fn validate_scroll_step(step_px: f64) -> TimelineResult<f64> {
    if !step_px.is_finite() || step_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "wheel scroll step must be finite and > 0".to_owned(),
        ));
    }
    Ok(step_px)
}

pub(super) fn validate_zoom_behavior(behavior: ZoomBehavior) -> TimelineResult<ZoomBehavior> {
    if !behavior.coarse_threshold_minutes.is_finite() || behavior.coarse_threshold_minutes < 0.0 {
        return Err(TimelineError::InvalidData(
            "zoom coarse threshold must be finite and >= 0".to_owned(),
        ));
    }
    if !behavior.coarse_step_minutes.is_finite() || behavior.coarse_step_minutes <= 0.0 {
        return Err(TimelineError::InvalidData(
            "zoom coarse step must be finite and > 0".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_style(style: TimelineStyle) -> TimelineResult<TimelineStyle> {
    style.validate()
}

pub(super) fn validate_config(config: &TimelineConfig) -> TimelineResult<()> {
    config.viewport.validate()?;
    config.layout_metrics.validate()?;
    validate_date_format(&config.date_format)?;
    validate_font_size(config.label_font_size_px)?;
    validate_scroll_step(config.wheel_scroll_step_px)?;
    validate_zoom_behavior(config.zoom_behavior)?;
    validate_style(config.style)?;
    if let Some(minutes) = config.time_unit_minutes
        && (!minutes.is_finite() || minutes <= 0.0)
    {
        return Err(TimelineError::InvalidData(
            "time unit minutes must be finite and > 0".to_owned(),
        ));
    }
    // Sub-millisecond minutes round to an empty unit.
    validate_time_unit(config.time_unit())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::{
        validate_config, validate_event_duration, validate_time_unit, validate_zoom_behavior,
    };
    use crate::api::TimelineConfig;
    use crate::interaction::ZoomBehavior;

    #[test]
    fn non_positive_units_are_rejected() {
        assert!(validate_time_unit(Some(TimeDelta::zero())).is_err());
        assert!(validate_time_unit(Some(TimeDelta::minutes(-5))).is_err());
        assert_eq!(validate_time_unit(None).expect("none is fine"), None);
    }

    #[test]
    fn zoom_step_must_be_positive() {
        let behavior = ZoomBehavior {
            coarse_step_minutes: 0.0,
            ..ZoomBehavior::default()
        };
        assert!(validate_zoom_behavior(behavior).is_err());
    }

    #[test]
    fn config_rejects_bad_minutes_and_formats() {
        let mut config = TimelineConfig::default();
        assert!(validate_config(&config).is_ok());
        config.time_unit_minutes = Some(f64::NAN);
        assert!(validate_config(&config).is_err());

        config.time_unit_minutes = Some(1e-9);
        assert!(validate_config(&config).is_err());

        let config = TimelineConfig::default().with_date_format("%H %z");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn durations_may_be_empty_but_not_negative() {
        assert!(validate_event_duration(Some(TimeDelta::seconds(-1))).is_err());
        assert_eq!(
            validate_event_duration(Some(TimeDelta::zero())).expect("zero"),
            Some(TimeDelta::zero())
        );
        assert_eq!(validate_event_duration(None).expect("none"), None);
    }
}
