use tracing::{debug, warn};

use crate::core::LabelMetrics;
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::validate_font_size;
use super::{DateLabelCacheStats, TextMeasurer, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn date_format(&self) -> &str {
        self.core.presentation.formatter.format_str()
    }

    /// Switches the strftime pattern used for tick labels.
    ///
    /// Label width, chunk size and extent all follow the new pattern.
    pub fn set_date_format(&mut self, format: &str) -> TimelineResult<()> {
        if let Err(err) = self.core.presentation.formatter.set_format(format) {
            warn!(error = %err, format, "rejected date format");
            return Err(err);
        }
        debug!(format, "set date format");
        self.on_label_style_changed();
        Ok(())
    }

    #[must_use]
    pub fn label_font_size_px(&self) -> f64 {
        self.core.presentation.label_font_size_px
    }

    pub fn set_label_font_size_px(&mut self, font_size_px: f64) -> TimelineResult<()> {
        self.core.presentation.label_font_size_px = validate_font_size(font_size_px)?;
        self.on_label_style_changed();
        Ok(())
    }

    /// Replaces the text measurer used to size date labels.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.core.presentation.measurer = Box::new(measurer);
        self.on_label_style_changed();
    }

    #[must_use]
    pub fn label_metrics(&self) -> LabelMetrics {
        self.core.layout.label_metrics
    }

    #[must_use]
    pub fn date_label_cache_stats(&self) -> DateLabelCacheStats {
        self.core.presentation.formatter.cache_stats()
    }

    fn on_label_style_changed(&mut self) {
        self.measure_label_width();
        self.update_extent_and_graduations();
    }
}
