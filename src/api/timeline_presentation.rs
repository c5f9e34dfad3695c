use crate::core::LayoutMetrics;

use super::label_formatter::DateLabelFormatter;
use super::{ItemVisualSelector, TextMeasurer, TimelineStyle};

/// Presentation collaborators and settings that feed layout but are not data.
pub(super) struct TimelinePresentationState {
    pub(super) formatter: DateLabelFormatter,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) visual_selector: Box<dyn ItemVisualSelector>,
    pub(super) label_font_size_px: f64,
    pub(super) metrics: LayoutMetrics,
    pub(super) style: TimelineStyle,
}
