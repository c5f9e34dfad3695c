use tracing::{trace, warn};

use crate::core::ScrollViewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> ScrollViewport {
        self.core.model.viewport
    }

    /// Width of the laid-out content: the extent, or the viewport when unconstrained.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.core
            .layout
            .extent
            .content_width(self.core.model.viewport.width)
    }

    #[must_use]
    pub fn max_horizontal_offset(&self) -> f64 {
        (self.content_width() - self.core.model.viewport.width).max(0.0)
    }

    /// Updates the visible window size after a host resize.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> TimelineResult<()> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            warn!(width, height, "rejected viewport size");
            return Err(TimelineError::InvalidViewport { width, height });
        }
        let previous_content_width = self.content_width();
        let viewport = &mut self.core.model.viewport;
        if viewport.width == width && viewport.height == height {
            return Ok(());
        }
        viewport.width = width;
        viewport.height = height;
        trace!(width, height, "viewport resized");

        self.clamp_horizontal_offset();
        if self.content_width() != previous_content_width {
            self.on_content_resized();
        } else {
            self.update_graduations();
            self.update_current_marker();
        }
        Ok(())
    }

    #[must_use]
    pub fn horizontal_offset(&self) -> f64 {
        self.core.model.viewport.horizontal_offset
    }

    /// Scrolls to an absolute offset, clamped to the scrollable span.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_to(&mut self, horizontal_offset: f64) -> TimelineResult<bool> {
        if !horizontal_offset.is_finite() {
            return Err(TimelineError::InvalidData(
                "horizontal offset must be finite".to_owned(),
            ));
        }
        let clamped = horizontal_offset.clamp(0.0, self.max_horizontal_offset());
        if clamped == self.core.model.viewport.horizontal_offset {
            return Ok(false);
        }
        self.core.model.viewport.horizontal_offset = clamped;
        trace!(horizontal_offset = clamped, "scrolled");
        self.update_graduations();
        Ok(true)
    }

    pub fn scroll_by(&mut self, delta_px: f64) -> TimelineResult<bool> {
        if !delta_px.is_finite() {
            return Err(TimelineError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        self.scroll_to(self.core.model.viewport.horizontal_offset + delta_px)
    }
}
