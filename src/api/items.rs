use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ItemSize;

/// Stable handle of an item owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A dated entry laid out on the timeline.
///
/// `size` is the intrinsic size the host measured for the item's visual;
/// when absent the engine asks the visual selector for a default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineItem {
    pub event_date: Option<NaiveDateTime>,
    pub event_duration: Option<TimeDelta>,
    pub size: Option<ItemSize>,
}

impl TimelineItem {
    #[must_use]
    pub fn at(event_date: NaiveDateTime) -> Self {
        Self {
            event_date: Some(event_date),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: TimeDelta) -> Self {
        self.event_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        self.event_duration.is_some()
    }
}

/// Visual family chosen for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemVisualKind {
    Point,
    Range,
    /// Drawn by the host; the engine only provides geometry.
    Custom(u32),
    /// Nothing to draw, the item still occupies a placement.
    Hidden,
}

/// Strategy deciding how an item is drawn.
pub trait ItemVisualSelector {
    fn select_visual(&self, item: &TimelineItem) -> ItemVisualKind;

    /// Intrinsic size used when the host did not measure the item.
    fn default_size(&self, kind: ItemVisualKind) -> ItemSize {
        match kind {
            ItemVisualKind::Point => ItemSize::new(6.0, 6.0),
            ItemVisualKind::Range => ItemSize::new(0.0, 10.0),
            ItemVisualKind::Custom(_) | ItemVisualKind::Hidden => ItemSize::default(),
        }
    }
}

/// Dated items become ranges when they carry a duration and points otherwise;
/// undated items are hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemVisualSelector;

impl ItemVisualSelector for DefaultItemVisualSelector {
    fn select_visual(&self, item: &TimelineItem) -> ItemVisualKind {
        match (item.event_date, item.event_duration) {
            (Some(_), Some(_)) => ItemVisualKind::Range,
            (Some(_), None) => ItemVisualKind::Point,
            (None, _) => ItemVisualKind::Hidden,
        }
    }
}

impl<F> ItemVisualSelector for F
where
    F: Fn(&TimelineItem) -> ItemVisualKind,
{
    fn select_visual(&self, item: &TimelineItem) -> ItemVisualKind {
        self(item)
    }
}

/// Ordered collection of items; iteration follows insertion order.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: IndexMap<ItemId, TimelineItem>,
    next_id: u64,
}

impl ItemStore {
    pub fn insert(&mut self, item: TimelineItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.items.insert(id, item);
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Option<TimelineItem> {
        self.items.shift_remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&TimelineItem> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut TimelineItem> {
        self.items.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &TimelineItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
