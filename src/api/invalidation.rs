use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

use super::{ItemId, TimelineEngine};

/// Layout output that changed since the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Extent,
    Graduations,
    Items,
    CurrentDate,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Extent => 1 << 0,
            Self::Graduations => 1 << 1,
            Self::Items => 1 << 2,
            Self::CurrentDate => 1 << 3,
            Self::Style => 1 << 4,
        }
    }
}

/// Bitmask of invalidation topics used by hosts for selective redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Extent.bit()
        | InvalidationTopic::Graduations.bit()
        | InvalidationTopic::Items.bit()
        | InvalidationTopic::CurrentDate.bit()
        | InvalidationTopic::Style.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Which items need to be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingItems<'a> {
    None,
    All,
    Some(&'a [ItemId]),
}

/// Topics plus the individual items touched since the last render.
///
/// Single-item edits are tracked by id until a full items pass supersedes them.
#[derive(Debug, Default)]
pub(super) struct PendingInvalidation {
    topics: InvalidationTopics,
    dirty_items: SmallVec<[ItemId; 8]>,
}

impl PendingInvalidation {
    pub(super) fn with_all_topics() -> Self {
        Self {
            topics: InvalidationTopics::all(),
            dirty_items: SmallVec::new(),
        }
    }

    pub(super) fn topics(&self) -> InvalidationTopics {
        self.topics
    }

    pub(super) fn merge_topics(&mut self, topics: InvalidationTopics) {
        self.topics = self.topics.union(topics);
        if topics.contains_topic(InvalidationTopic::Items) {
            self.dirty_items.clear();
        }
    }

    pub(super) fn mark_item(&mut self, id: ItemId) {
        if self.topics.contains_topic(InvalidationTopic::Items) || self.dirty_items.contains(&id) {
            return;
        }
        self.dirty_items.push(id);
    }

    pub(super) fn items(&self) -> PendingItems<'_> {
        if self.topics.contains_topic(InvalidationTopic::Items) {
            PendingItems::All
        } else if self.dirty_items.is_empty() {
            PendingItems::None
        } else {
            PendingItems::Some(&self.dirty_items)
        }
    }

    pub(super) fn is_none(&self) -> bool {
        self.topics.is_none() && self.dirty_items.is_empty()
    }

    pub(super) fn clear(&mut self) {
        self.topics = InvalidationTopics::none();
        self.dirty_items.clear();
    }
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.core.runtime.pending_invalidation.topics()
    }

    #[must_use]
    pub fn has_pending_invalidation_topic(&self, topic: InvalidationTopic) -> bool {
        self.pending_invalidation().contains_topic(topic)
    }

    #[must_use]
    pub fn pending_items(&self) -> PendingItems<'_> {
        self.core.runtime.pending_invalidation.items()
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.core.runtime.pending_invalidation.is_none()
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.core.runtime.pending_invalidation.clear();
    }

    pub fn build_render_frame_if_invalidated(&mut self) -> TimelineResult<Option<RenderFrame>> {
        if !self.has_pending_invalidation() {
            return Ok(None);
        }
        self.build_render_frame().map(Some)
    }

    /// Renders only when something changed; returns whether a frame was drawn.
    pub fn render_if_invalidated(&mut self) -> TimelineResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.core
            .runtime
            .pending_invalidation
            .merge_topics(InvalidationTopics::from_topic(topic));
    }

    pub(super) fn invalidate_item(&mut self, id: ItemId) {
        self.core.runtime.pending_invalidation.mark_item(id);
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTopic, InvalidationTopics, PendingInvalidation, PendingItems};
    use crate::api::ItemStore;
    use crate::api::TimelineItem;

    #[test]
    fn topics_union_and_contains_work() {
        let topics = InvalidationTopics::from_topic(InvalidationTopic::Graduations)
            .with_topic(InvalidationTopic::CurrentDate);
        assert!(topics.contains_topic(InvalidationTopic::Graduations));
        assert!(topics.contains_topic(InvalidationTopic::CurrentDate));
        assert!(!topics.contains_topic(InvalidationTopic::Items));
        assert!(InvalidationTopics::all().contains_topic(InvalidationTopic::Style));
    }

    #[test]
    fn item_edits_are_tracked_until_a_full_items_pass() {
        let mut store = ItemStore::default();
        let a = store.insert(TimelineItem::default());
        let b = store.insert(TimelineItem::default());

        let mut pending = PendingInvalidation::default();
        assert_eq!(pending.items(), PendingItems::None);
        pending.mark_item(a);
        pending.mark_item(b);
        pending.mark_item(a);
        assert_eq!(pending.items(), PendingItems::Some(&[a, b]));

        pending.merge_topics(InvalidationTopics::from_topic(InvalidationTopic::Items));
        assert_eq!(pending.items(), PendingItems::All);
        pending.mark_item(a);
        assert_eq!(pending.items(), PendingItems::All);

        pending.clear();
        assert!(pending.is_none());
    }
}
