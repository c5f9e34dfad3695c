use chrono::{NaiveDateTime, TimeDelta};
use tracing::{trace, warn};

use crate::core::{ItemSize, Placement};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::validation::validate_event_duration;
use super::{
    InvalidationTopic, ItemId, ItemVisualKind, ItemVisualSelector, TimelineEngine, TimelineItem,
};

impl<R: Renderer> TimelineEngine<R> {
    /// Adds an item and places it against the current layout.
    ///
    /// Items carrying a negative duration are rejected.
    pub fn add_item(&mut self, item: TimelineItem) -> TimelineResult<ItemId> {
        if let Err(err) = validate_event_duration(item.event_duration) {
            warn!(error = %err, duration = ?item.event_duration, "rejected item");
            return Err(err);
        }
        let id = self.core.model.items.insert(item);
        trace!(item = %id, count = self.core.model.items.len(), "add item");
        self.update_item_placement(id);
        Ok(id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> TimelineResult<TimelineItem> {
        let Some(item) = self.core.model.items.remove(id) else {
            warn!(item = %id, "remove of unknown item");
            return Err(TimelineError::UnknownItem(id));
        };
        self.core.layout.placements.shift_remove(&id);
        if self.core.model.interaction.hovered_item() == Some(id) {
            self.core.model.interaction.on_pointer_leave();
        }
        trace!(item = %id, count = self.core.model.items.len(), "remove item");
        self.invalidate(InvalidationTopic::Items);
        Ok(item)
    }

    pub fn clear_items(&mut self) {
        self.core.model.items.clear();
        self.core.layout.placements.clear();
        self.core.model.interaction.on_pointer_leave();
        self.invalidate(InvalidationTopic::Items);
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&TimelineItem> {
        self.core.model.items.get(id)
    }

    /// Item handles in insertion order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.core.model.items.iter().map(|(id, _)| id)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.core.model.items.len()
    }

    pub fn set_item_event_date(
        &mut self,
        id: ItemId,
        event_date: Option<NaiveDateTime>,
    ) -> TimelineResult<()> {
        self.edit_item(id, |item| item.event_date = event_date)
    }

    pub fn set_item_event_duration(
        &mut self,
        id: ItemId,
        event_duration: Option<TimeDelta>,
    ) -> TimelineResult<()> {
        if let Err(err) = validate_event_duration(event_duration) {
            warn!(item = %id, error = %err, "rejected item duration");
            return Err(err);
        }
        self.edit_item(id, |item| item.event_duration = event_duration)
    }

    /// Records the size the host measured for the item's visual.
    pub fn set_item_size(&mut self, id: ItemId, size: Option<ItemSize>) -> TimelineResult<()> {
        if let Some(size) = size
            && (!size.width.is_finite()
                || !size.height.is_finite()
                || size.width < 0.0
                || size.height < 0.0)
        {
            return Err(TimelineError::InvalidData(
                "item size must be finite and >= 0".to_owned(),
            ));
        }
        self.edit_item(id, |item| item.size = size)
    }

    #[must_use]
    pub fn item_placement(&self, id: ItemId) -> Option<Placement> {
        self.core.layout.placements.get(&id).copied()
    }

    /// Placements in insertion order.
    pub fn item_placements(&self) -> impl Iterator<Item = (ItemId, Placement)> + '_ {
        self.core
            .layout
            .placements
            .iter()
            .map(|(id, placement)| (*id, *placement))
    }

    #[must_use]
    pub fn item_visual_kind(&self, id: ItemId) -> Option<ItemVisualKind> {
        self.core
            .model
            .items
            .get(id)
            .map(|item| self.core.presentation.visual_selector.select_visual(item))
    }

    /// Replaces the strategy choosing each item's visual and re-places all items.
    pub fn set_item_visual_selector(&mut self, selector: impl ItemVisualSelector + 'static) {
        self.core.presentation.visual_selector = Box::new(selector);
        self.update_item_placements();
    }

    fn edit_item(&mut self, id: ItemId, edit: impl FnOnce(&mut TimelineItem)) -> TimelineResult<()> {
        let Some(item) = self.core.model.items.get_mut(id) else {
            warn!(item = %id, "edit of unknown item");
            return Err(TimelineError::UnknownItem(id));
        };
        edit(item);
        self.update_item_placement(id);
        Ok(())
    }
}
