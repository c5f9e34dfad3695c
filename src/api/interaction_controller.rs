use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{
    InteractionState, ModifierKeys, WheelContext, WheelOutcome, ZoomBehavior, route_wheel,
};
use crate::render::Renderer;

use super::validation::{validate_scroll_step, validate_zoom_behavior};
use super::{ItemId, ItemVisualKind, TimelineEngine};

/// Request to open the host's flyout over an item, in viewport coordinates.
///
/// The anchor is the horizontal center of the item's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyoutRequest {
    pub item: ItemId,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.core.runtime.zoom_enabled
    }

    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.core.runtime.zoom_enabled = enabled;
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.core.runtime.zoom_behavior
    }

    pub fn set_zoom_behavior(&mut self, behavior: ZoomBehavior) -> TimelineResult<()> {
        self.core.runtime.zoom_behavior = validate_zoom_behavior(behavior)?;
        Ok(())
    }

    #[must_use]
    pub fn wheel_scroll_step_px(&self) -> f64 {
        self.core.runtime.wheel_scroll_step_px
    }

    pub fn set_wheel_scroll_step_px(&mut self, step_px: f64) -> TimelineResult<()> {
        self.core.runtime.wheel_scroll_step_px = validate_scroll_step(step_px)?;
        Ok(())
    }

    #[must_use]
    pub fn flyout_enabled(&self) -> bool {
        self.core.runtime.flyout_enabled
    }

    /// Declares whether the host has a flyout to show when an item is clicked.
    pub fn set_flyout_enabled(&mut self, enabled: bool) {
        self.core.runtime.flyout_enabled = enabled;
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.core.model.interaction
    }

    /// Routes a mouse wheel event to zoom or horizontal scrolling and applies it.
    pub fn handle_wheel(
        &mut self,
        wheel_delta: f64,
        modifiers: ModifierKeys,
    ) -> TimelineResult<WheelOutcome> {
        let context = WheelContext {
            zoom_enabled: self.core.runtime.zoom_enabled,
            zoom: self.core.runtime.zoom_behavior,
            actual_unit: self.core.layout.actual_unit,
            content_width: self.content_width(),
            viewport: self.core.model.viewport,
            scroll_step_px: self.core.runtime.wheel_scroll_step_px,
        };
        let outcome = match route_wheel(context, wheel_delta, modifiers) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, wheel_delta, "rejected wheel event");
                return Err(err);
            }
        };
        match outcome {
            WheelOutcome::Zoomed(unit) => {
                debug!(unit_minutes = unit.num_minutes(), "wheel zoom");
                self.set_time_unit(Some(unit))?;
            }
            WheelOutcome::Scrolled { horizontal_offset } => {
                self.scroll_to(horizontal_offset)?;
            }
            WheelOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Topmost drawn item under a content-space point; later items win.
    #[must_use]
    pub fn hit_test_item(&self, content_x: f64, content_y: f64) -> Option<ItemId> {
        let selector = &self.core.presentation.visual_selector;
        self.core
            .layout
            .placements
            .iter()
            .rev()
            .filter_map(|(id, placement)| Some((*id, placement.geometry()?)))
            .filter(|(id, _)| {
                self.core.model.items.get(*id).is_some_and(|item| {
                    selector.select_visual(item) != ItemVisualKind::Hidden
                })
            })
            .find(|(_, geometry)| geometry.contains(content_x, content_y))
            .map(|(id, _)| id)
    }

    /// Tracks the pointer, in viewport coordinates; returns the hovered item.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> TimelineResult<Option<ItemId>> {
        validate_pointer(x, y)?;
        let hovered = self.hit_test_item(x + self.horizontal_offset(), y);
        self.core.model.interaction.on_pointer_move(x, y, hovered);
        Ok(hovered)
    }

    pub fn pointer_leave(&mut self) {
        self.core.model.interaction.on_pointer_leave();
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> TimelineResult<Option<ItemId>> {
        let hovered = self.pointer_move(x, y)?;
        self.core.model.interaction.on_press();
        Ok(hovered)
    }

    /// Ends a press; releasing over an item asks the host to open its flyout
    /// when one is declared.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> TimelineResult<Option<FlyoutRequest>> {
        let hovered = self.pointer_move(x, y)?;
        let was_pressing = self.core.model.interaction.on_release();
        if !was_pressing || !self.core.runtime.flyout_enabled {
            return Ok(None);
        }
        let Some(item) = hovered else {
            return Ok(None);
        };
        let Some(geometry) = self
            .core
            .layout
            .placements
            .get(&item)
            .and_then(|placement| placement.geometry())
        else {
            return Ok(None);
        };
        let request = FlyoutRequest {
            item,
            anchor_x: geometry.left + geometry.width / 2.0 - self.horizontal_offset(),
            anchor_y: geometry.top,
        };
        debug!(item = %item, anchor_x = request.anchor_x, "flyout requested");
        Ok(Some(request))
    }
}

fn validate_pointer(x: f64, y: f64) -> TimelineResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(TimelineError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
