use chrono::TimeDelta;
use indexmap::IndexMap;

use crate::core::{Extent, LabelMetrics, Placement, min_time_unit};

use super::{Graduations, ItemId};

/// Output of the layout passes, rebuilt from the model on every change.
#[derive(Debug)]
pub(super) struct TimelineLayoutState {
    pub(super) extent: Extent,
    pub(super) actual_unit: TimeDelta,
    pub(super) label_metrics: LabelMetrics,
    pub(super) graduations: Graduations,
    pub(super) placements: IndexMap<ItemId, Placement>,
    /// `None` while no current date is set and the marker is detached.
    pub(super) current_marker: Option<Placement>,
    /// Set while a range change recomputes the extent, so the resize it
    /// triggers does not lay out against half-updated state.
    pub(super) ignore_graduation_updates: bool,
}

impl Default for TimelineLayoutState {
    fn default() -> Self {
        Self {
            extent: Extent::Unconstrained,
            actual_unit: min_time_unit(),
            label_metrics: LabelMetrics::default(),
            graduations: Graduations::default(),
            placements: IndexMap::new(),
            current_marker: None,
            ignore_graduation_updates: false,
        }
    }
}
