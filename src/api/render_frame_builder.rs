use crate::core::Placement;
use crate::error::TimelineResult;
use crate::render::{
    FrameSize, RectPrimitive, RectRole, RectShape, RenderFrame, Renderer, TextPrimitive,
};

use super::{ItemVisualKind, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Materializes the current layout as a frame in viewport coordinates.
    ///
    /// Custom item visuals are left to the host, which reads their geometry
    /// from `item_placements`.
    pub fn build_render_frame(&self) -> TimelineResult<RenderFrame> {
        let viewport = self.core.model.viewport;
        let metrics = self.core.presentation.metrics;
        let labels = self.core.layout.label_metrics;
        let style = self.core.presentation.style;
        let font_size_px = self.core.presentation.label_font_size_px;
        let origin_x = viewport.origin_x();

        let mut frame = RenderFrame::new(FrameSize::new(viewport.width, viewport.height));

        let graduations = &self.core.layout.graduations;
        if let Some(baseline) = graduations.baseline {
            frame.rects.push(RectPrimitive::new(
                origin_x + baseline.left_px,
                metrics.centered_top(1.0),
                baseline.width_px,
                1.0,
                style.foreground,
                RectRole::Baseline,
            ));
        }
        for tick in &graduations.ticks {
            frame.rects.push(RectPrimitive::new(
                origin_x + tick.mark_left(metrics),
                metrics.padding_top_px,
                metrics.tick_width_px,
                metrics.tick_height_px,
                style.foreground,
                RectRole::TickMark,
            ));
            if tick.label.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                origin_x + tick.label_left(labels),
                tick.label_top(metrics),
                font_size_px,
                style.foreground,
            ));
        }

        for (id, placement) in &self.core.layout.placements {
            let (Placement::Visible(geometry), Some(item)) =
                (placement, self.core.model.items.get(*id))
            else {
                continue;
            };
            let (fill, shape) = match self.core.presentation.visual_selector.select_visual(item) {
                ItemVisualKind::Point => (style.point_item_fill, RectShape::Ellipse),
                ItemVisualKind::Range => (style.range_item_fill, RectShape::Rectangle),
                ItemVisualKind::Custom(_) | ItemVisualKind::Hidden => continue,
            };
            frame.rects.push(
                RectPrimitive::new(
                    origin_x + geometry.left,
                    geometry.top,
                    geometry.width,
                    geometry.height,
                    fill,
                    RectRole::Item,
                )
                .with_shape(shape),
            );
        }

        if let Some(Placement::Visible(marker)) = self.core.layout.current_marker {
            frame.rects.push(RectPrimitive::new(
                origin_x + marker.left,
                marker.top,
                marker.width,
                marker.height,
                style.current_date_fill,
                RectRole::CurrentDate,
            ));
        }

        Ok(frame)
    }
}
