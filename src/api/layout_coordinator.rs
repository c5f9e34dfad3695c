use tracing::{debug, trace};

use crate::core::{
    GraduationInput, LabelMetrics, Placement, PlacementContext, compute_extent,
    compute_graduations, total_minutes,
};
use crate::render::Renderer;

use super::timeline_presentation::TimelinePresentationState;
use super::{Graduations, InvalidationTopic, ItemId, TimelineEngine, TimelineItem};

impl<R: Renderer> TimelineEngine<R> {
    /// Re-measures the widest date label with the active format and font.
    pub(super) fn measure_label_width(&mut self) {
        let presentation = &mut self.core.presentation;
        let widest = presentation.formatter.widest_label();
        let width = presentation
            .measurer
            .measure_text_width(&widest, presentation.label_font_size_px);
        let labels = LabelMetrics::new(width);
        debug!(
            label_width_px = labels.label_width_px,
            chunk_size_px = labels.desired_chunk_size(),
            "measured date label"
        );
        self.core.layout.label_metrics = labels;
    }

    /// Recomputes the extent; a content width change lays everything out again.
    pub(super) fn update_extent(&mut self) {
        let previous_width = self.content_width();
        let extent = compute_extent(
            self.core.model.line_range(),
            self.core.model.preferred_unit,
            self.core.layout.label_metrics.desired_chunk_size(),
        );
        if extent.invalidates_time_unit() && !self.core.layout.extent.invalidates_time_unit() {
            debug!(
                unit_minutes = ?self.core.model.preferred_unit.map(total_minutes),
                "preferred unit overflows the canvas, deriving graduations automatically"
            );
        }
        if extent != self.core.layout.extent {
            self.core.layout.extent = extent;
            self.invalidate(InvalidationTopic::Extent);
        }
        self.clamp_horizontal_offset();
        if self.content_width() != previous_width {
            self.on_content_resized();
        }
    }

    /// Extent refresh for changes that also alter the graduation cadence.
    pub(super) fn update_extent_and_graduations(&mut self) {
        let previous_width = self.content_width();
        self.update_extent();
        if self.content_width() == previous_width {
            self.update_graduations();
        }
    }

    pub(super) fn on_content_resized(&mut self) {
        if self.core.layout.ignore_graduation_updates {
            trace!("content resize deferred while the range is applied");
            return;
        }
        self.update_graduations();
        self.update_item_placements();
        self.update_current_marker();
    }

    /// Keeps the scroll offset inside the scrollable span; returns whether it moved.
    pub(super) fn clamp_horizontal_offset(&mut self) -> bool {
        let max_offset = self.max_horizontal_offset();
        let viewport = &mut self.core.model.viewport;
        let clamped = viewport.horizontal_offset.clamp(0.0, max_offset);
        if clamped == viewport.horizontal_offset {
            return false;
        }
        viewport.horizontal_offset = clamped;
        true
    }

    pub(super) fn update_graduations(&mut self) {
        if self.core.layout.ignore_graduation_updates {
            return;
        }
        let input = GraduationInput {
            range: self.core.model.line_range(),
            content_width: self.content_width(),
            viewport: self.core.model.viewport,
            preferred_unit: self.core.model.preferred_unit,
            invalid_time_unit: self.core.layout.extent.invalidates_time_unit(),
            labels: self.core.layout.label_metrics,
        };
        let graduations = match compute_graduations(&input) {
            Some(plan) => {
                self.core.layout.actual_unit = plan.actual_unit;
                Graduations::from_plan(&plan, &mut self.core.presentation.formatter)
            }
            None => Graduations::default(),
        };
        trace!(
            tick_count = graduations.ticks.len(),
            actual_unit_minutes = total_minutes(self.core.layout.actual_unit),
            "graduation pass"
        );
        self.core.layout.graduations = graduations;
        self.invalidate(InvalidationTopic::Graduations);
    }

    fn placement_context(&self) -> Option<PlacementContext> {
        Some(PlacementContext {
            range: self.core.model.line_range()?,
            content_width: self.content_width(),
            metrics: self.core.presentation.metrics,
        })
    }

    pub(super) fn update_item_placements(&mut self) {
        if self.core.layout.ignore_graduation_updates {
            return;
        }
        let context = self.placement_context();
        let presentation = &self.core.presentation;
        self.core.layout.placements = self
            .core
            .model
            .items
            .iter()
            .map(|(id, item)| (id, resolve_placement(context, presentation, item)))
            .collect();
        self.invalidate(InvalidationTopic::Items);
    }

    pub(super) fn update_item_placement(&mut self, id: ItemId) {
        let Some(item) = self.core.model.items.get(id) else {
            return;
        };
        let placement = resolve_placement(self.placement_context(), &self.core.presentation, item);
        self.core.layout.placements.insert(id, placement);
        self.invalidate_item(id);
    }

    pub(super) fn update_current_marker(&mut self) {
        let marker = self.core.model.current_date.map(|current| {
            match (self.placement_context(), self.core.model.start_date) {
                (Some(context), Some(start)) => context.place_current_date(current, start),
                _ => Placement::OffCanvas,
            }
        });
        self.core.layout.current_marker = marker;
        self.invalidate(InvalidationTopic::CurrentDate);
    }

    /// Full layout from the model, used at construction and when the visual
    /// strategy changes.
    pub(super) fn relayout_all(&mut self) {
        self.measure_label_width();
        self.update_extent();
        self.update_graduations();
        self.update_item_placements();
        self.update_current_marker();
    }
}

fn resolve_placement(
    context: Option<PlacementContext>,
    presentation: &TimelinePresentationState,
    item: &TimelineItem,
) -> Placement {
    let Some(context) = context else {
        return Placement::OffCanvas;
    };
    let kind = presentation.visual_selector.select_visual(item);
    let size = item
        .size
        .unwrap_or_else(|| presentation.visual_selector.default_size(kind));
    context.place_item(item.event_date, item.event_duration, size)
}
