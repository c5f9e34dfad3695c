use chrono::{NaiveDateTime, TimeDelta};

use crate::core::{LineRange, ScrollViewport};
use crate::interaction::InteractionState;

use super::ItemStore;

/// Host-provided timeline state: dates, preferred unit, items and viewport.
///
/// Derived layout lives in `TimelineLayoutState` so every pass can be rerun
/// from this struct alone.
#[derive(Debug, Default)]
pub(super) struct TimelineModel {
    pub(super) viewport: ScrollViewport,
    pub(super) start_date: Option<NaiveDateTime>,
    pub(super) end_date: Option<NaiveDateTime>,
    pub(super) current_date: Option<NaiveDateTime>,
    pub(super) preferred_unit: Option<TimeDelta>,
    pub(super) items: ItemStore,
    pub(super) interaction: InteractionState,
}

impl TimelineModel {
    /// Normalized active range, `None` while the bounds do not form one.
    pub(super) fn line_range(&self) -> Option<LineRange> {
        LineRange::from_bounds(self.start_date, self.end_date)
    }
}
