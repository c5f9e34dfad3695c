use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{Baseline, GraduationPlan, LabelMetrics, LayoutMetrics, TickKind};

use super::label_formatter::DateLabelFormatter;

/// A labelled graduation, in content coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub offset_px: f64,
    pub date: NaiveDateTime,
    pub label: String,
    pub kind: TickKind,
}

impl AxisTick {
    /// Left edge of the tick mark. The end mark is pulled inside the content.
    #[must_use]
    pub fn mark_left(&self, metrics: LayoutMetrics) -> f64 {
        match self.kind {
            TickKind::End => self.offset_px - metrics.tick_width_px,
            TickKind::Start | TickKind::Interior => self.offset_px,
        }
    }

    /// Left edge of the label, centered on the tick.
    #[must_use]
    pub fn label_left(&self, labels: LabelMetrics) -> f64 {
        self.offset_px - labels.label_mid()
    }

    /// Labels hang below the tick band.
    #[must_use]
    pub fn label_top(&self, metrics: LayoutMetrics) -> f64 {
        metrics.tick_height_px + metrics.padding_top_px
    }

    #[must_use]
    pub fn viewport_x(&self, origin_x: f64) -> f64 {
        origin_x + self.offset_px
    }
}

/// Ticks currently laid out on the axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graduations {
    pub ticks: Vec<AxisTick>,
    /// Content origin in viewport coordinates when the ticks were computed.
    pub origin_x: f64,
    pub baseline: Option<Baseline>,
}

impl Graduations {
    pub(super) fn from_plan(plan: &GraduationPlan, formatter: &mut DateLabelFormatter) -> Self {
        let ticks = plan
            .marks
            .iter()
            .map(|mark| AxisTick {
                offset_px: mark.offset_px,
                date: mark.date,
                label: formatter.format(mark.date),
                kind: mark.kind,
            })
            .collect();
        Self {
            ticks,
            origin_x: plan.origin_x,
            baseline: Some(plan.baseline),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn interior(&self) -> impl Iterator<Item = &AxisTick> {
        self.ticks
            .iter()
            .filter(|tick| tick.kind == TickKind::Interior)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::AxisTick;
    use crate::core::{LabelMetrics, LayoutMetrics, TickKind};

    fn tick(offset_px: f64, kind: TickKind) -> AxisTick {
        AxisTick {
            offset_px,
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            label: "00:00".to_owned(),
            kind,
        }
    }

    #[test]
    fn end_mark_is_drawn_inside_the_content() {
        let metrics = LayoutMetrics::default();
        assert_eq!(tick(600.0, TickKind::End).mark_left(metrics), 599.0);
        assert_eq!(tick(60.0, TickKind::Interior).mark_left(metrics), 60.0);
    }

    #[test]
    fn label_is_centered_on_the_tick() {
        let tick = tick(100.0, TickKind::Interior);
        assert_eq!(tick.label_left(LabelMetrics::new(30.0)), 85.0);
        assert_eq!(tick.label_top(LayoutMetrics::default()), 10.0);
        assert_eq!(tick.viewport_x(-40.0), 60.0);
    }
}
