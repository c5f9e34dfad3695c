use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::{LayoutMetrics, ScrollViewport, minutes_to_delta, total_minutes};
use crate::interaction::ZoomBehavior;

use super::TimelineStyle;
use super::label_formatter::DEFAULT_DATE_FORMAT;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup. The preferred time unit is stored in minutes since `TimeDelta`
/// has no serde representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub viewport: ScrollViewport,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub current_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub time_unit_minutes: Option<f64>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub is_zoom_enabled: bool,
    #[serde(default)]
    pub zoom_behavior: ZoomBehavior,
    #[serde(default = "default_wheel_scroll_step_px")]
    pub wheel_scroll_step_px: f64,
    #[serde(default)]
    pub layout_metrics: LayoutMetrics,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default)]
    pub style: TimelineStyle,
    #[serde(default)]
    pub flyout_enabled: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::new(ScrollViewport::default())
    }
}

impl TimelineConfig {
    /// Creates a config with no range and default presentation.
    #[must_use]
    pub fn new(viewport: ScrollViewport) -> Self {
        Self {
            viewport,
            start_date: None,
            end_date: None,
            current_date: None,
            time_unit_minutes: None,
            date_format: default_date_format(),
            is_zoom_enabled: false,
            zoom_behavior: ZoomBehavior::default(),
            wheel_scroll_step_px: default_wheel_scroll_step_px(),
            layout_metrics: LayoutMetrics::default(),
            label_font_size_px: default_label_font_size_px(),
            style: TimelineStyle::default(),
            flyout_enabled: false,
        }
    }

    #[must_use]
    pub fn with_date_range(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_current_date(mut self, current: NaiveDateTime) -> Self {
        self.current_date = Some(current);
        self
    }

    #[must_use]
    pub fn with_time_unit(mut self, unit: TimeDelta) -> Self {
        self.time_unit_minutes = Some(total_minutes(unit));
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.is_zoom_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, behavior: ZoomBehavior) -> Self {
        self.zoom_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_wheel_scroll_step_px(mut self, step_px: f64) -> Self {
        self.wheel_scroll_step_px = step_px;
        self
    }

    #[must_use]
    pub fn with_layout_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.layout_metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_label_font_size_px(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_flyout_enabled(mut self, enabled: bool) -> Self {
        self.flyout_enabled = enabled;
        self
    }

    /// Preferred unit as a duration, when one is configured.
    #[must_use]
    pub fn time_unit(&self) -> Option<TimeDelta> {
        self.time_unit_minutes.map(minutes_to_delta)
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_wheel_scroll_step_px() -> f64 {
    48.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}
