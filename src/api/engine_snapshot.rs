use serde::{Deserialize, Serialize};

use crate::core::{Extent, LabelMetrics, LineRange, Placement, ScrollViewport, total_minutes};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{DateLabelCacheStats, Graduations, ItemId, ItemVisualKind, TimelineEngine};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub visual: ItemVisualKind,
    pub placement: Placement,
}

/// Serializable deterministic layout snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: ScrollViewport,
    pub line_range: Option<LineRange>,
    pub extent: Extent,
    pub content_width: f64,
    pub preferred_unit_minutes: Option<f64>,
    pub actual_unit_minutes: f64,
    pub invalid_time_unit: bool,
    pub label_metrics: LabelMetrics,
    pub graduations: Graduations,
    pub items: Vec<ItemSnapshot>,
    pub current_date: Option<Placement>,
    pub label_cache: DateLabelCacheStats,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        let items = self
            .item_placements()
            .filter_map(|(id, placement)| {
                Some(ItemSnapshot {
                    id,
                    visual: self.item_visual_kind(id)?,
                    placement,
                })
            })
            .collect();
        LayoutSnapshot {
            viewport: self.core.model.viewport,
            line_range: self.core.model.line_range(),
            extent: self.core.layout.extent,
            content_width: self.content_width(),
            preferred_unit_minutes: self.core.model.preferred_unit.map(total_minutes),
            actual_unit_minutes: total_minutes(self.core.layout.actual_unit),
            invalid_time_unit: self.invalid_time_unit(),
            label_metrics: self.core.layout.label_metrics,
            graduations: self.core.layout.graduations.clone(),
            items,
            current_date: self.core.layout.current_marker,
            label_cache: self.date_label_cache_stats(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
