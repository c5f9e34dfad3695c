use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::{LineRange, Placement};
use crate::render::Renderer;

use super::{InvalidationTopic, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.core.model.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.core.model.end_date
    }

    /// Normalized axis range, `None` unless both bounds are set and ordered.
    #[must_use]
    pub fn line_range(&self) -> Option<LineRange> {
        self.core.model.line_range()
    }

    /// Replaces both bounds and recomputes the whole layout once.
    ///
    /// An incomplete or inverted range is accepted: layout goes inactive and
    /// every item is parked off-canvas until the range becomes valid.
    pub fn set_date_range(&mut self, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) {
        self.core.model.start_date = start;
        self.core.model.end_date = end;
        debug!(
            start = ?start,
            end = ?end,
            active = self.core.model.line_range().is_some(),
            "set date range"
        );

        self.core.layout.ignore_graduation_updates = true;
        self.update_extent();
        self.core.layout.ignore_graduation_updates = false;

        self.update_item_placements();
        self.update_graduations();
        self.update_current_marker();
        self.invalidate(InvalidationTopic::Extent);
    }

    pub fn set_start_date(&mut self, start: Option<NaiveDateTime>) {
        self.set_date_range(start, self.core.model.end_date);
    }

    pub fn set_end_date(&mut self, end: Option<NaiveDateTime>) {
        self.set_date_range(self.core.model.start_date, end);
    }

    #[must_use]
    pub fn current_date(&self) -> Option<NaiveDateTime> {
        self.core.model.current_date
    }

    /// Sets or clears the current-date marker.
    pub fn set_current_date(&mut self, current: Option<NaiveDateTime>) {
        if self.core.model.current_date == current {
            return;
        }
        debug!(current = ?current, "set current date");
        self.core.model.current_date = current;
        self.update_current_marker();
    }

    /// Marker geometry; `None` when no current date is set.
    #[must_use]
    pub fn current_date_placement(&self) -> Option<Placement> {
        self.core.layout.current_marker
    }
}
