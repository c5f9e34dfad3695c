use tracing::trace;

use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::validate_style;
use super::{InvalidationTopic, TimelineStyle, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the timeline dates and items, runs the extent,
/// graduation and placement passes when they change, and hands finished
/// frames to the renderer.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.core.presentation.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        self.core.presentation.style = validate_style(style)?;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    /// Builds the current frame, hands it to the renderer and clears pending
    /// invalidation.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "rendered timeline frame"
        );
        self.clear_pending_invalidation();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
