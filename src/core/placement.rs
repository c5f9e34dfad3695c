use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::dates::LineRange;
use super::types::LayoutMetrics;

/// Intrinsic size a host measured for an item's visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

impl ItemSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemShape {
    /// Fixed-size marker centered on its date.
    Point,
    /// Left-anchored span whose width follows its duration.
    Range,
}

/// Content-space rectangle of a visible item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub shape: ItemShape,
    /// Pixel offset of the item's date on the axis.
    pub anchor_x: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ItemGeometry {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Outcome of placing an item: either a rectangle on the content surface or
/// parked outside of it, still attached for later repositioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    Visible(ItemGeometry),
    OffCanvas,
}

impl Placement {
    #[must_use]
    pub fn geometry(self) -> Option<ItemGeometry> {
        match self {
            Self::Visible(geometry) => Some(geometry),
            Self::OffCanvas => None,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible(_))
    }
}

/// Axis state shared by every placement of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    pub range: LineRange,
    pub content_width: f64,
    pub metrics: LayoutMetrics,
}

impl PlacementContext {
    /// Places one dated item on the content surface.
    ///
    /// Items without a date, or laid out before the content has a width,
    /// anchor at the line start.
    #[must_use]
    pub fn place_item(
        self,
        event_date: Option<NaiveDateTime>,
        event_duration: Option<TimeDelta>,
        size: ItemSize,
    ) -> Placement {
        let anchor = match event_date {
            Some(date) if self.content_width > 0.0 => date,
            _ => self.range.start(),
        };
        if !self.range.contains(anchor) {
            return Placement::OffCanvas;
        }

        let left = self.range.offset_for(anchor, self.content_width);
        let top = self.metrics.centered_top(size.height);
        let geometry = match event_duration {
            Some(duration) => {
                let right = anchor
                    .checked_add_signed(duration)
                    .map_or(self.content_width, |end| {
                        self.range.offset_for(end, self.content_width)
                    });
                ItemGeometry {
                    shape: ItemShape::Range,
                    anchor_x: left,
                    left,
                    top,
                    width: (right - left).max(1.0),
                    height: size.height,
                }
            }
            None => ItemGeometry {
                shape: ItemShape::Point,
                anchor_x: left,
                left: left - (size.width - self.metrics.tick_width_px) / 2.0,
                top,
                width: size.width,
                height: size.height,
            },
        };
        Placement::Visible(geometry)
    }

    /// Places the current-date marker as a zero-width point.
    #[must_use]
    pub fn place_current_date(self, current: NaiveDateTime, start: NaiveDateTime) -> Placement {
        if current < start || current > self.range.end() {
            return Placement::OffCanvas;
        }
        let left = self.range.offset_for(current, self.content_width);
        let height = self.metrics.current_marker_height_px;
        Placement::Visible(ItemGeometry {
            shape: ItemShape::Point,
            anchor_x: left,
            left,
            top: self.metrics.centered_top(height),
            width: self.metrics.current_marker_width_px,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::{ItemShape, ItemSize, Placement, PlacementContext};
    use crate::core::dates::LineRange;
    use crate::core::types::LayoutMetrics;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|day| day.and_hms_opt(h, m, s))
            .expect("valid date")
    }

    fn context(content_width: f64) -> PlacementContext {
        PlacementContext {
            range: LineRange::from_bounds(Some(at(10, 0, 0)), Some(at(10, 10, 0)))
                .expect("active range"),
            content_width,
            metrics: LayoutMetrics::default(),
        }
    }

    #[test]
    fn point_item_is_centered_on_its_date() {
        let placement = context(100.0).place_item(Some(at(10, 2, 0)), None, ItemSize::new(7.0, 6.0));
        let geometry = placement.geometry().expect("visible");
        assert_eq!(geometry.shape, ItemShape::Point);
        assert_eq!(geometry.anchor_x, 20.0);
        assert_eq!(geometry.left, 17.0);
        assert_eq!(geometry.top, 2.0);
    }

    #[test]
    fn range_item_width_follows_duration() {
        let placement = context(100.0).place_item(
            Some(at(10, 0, 0)),
            Some(TimeDelta::minutes(2)),
            ItemSize::new(50.0, 10.0),
        );
        let geometry = placement.geometry().expect("visible");
        assert_eq!(geometry.shape, ItemShape::Range);
        assert_eq!(geometry.left, 0.0);
        assert_eq!(geometry.right(), 20.0);
        assert_eq!(geometry.width, 20.0);
    }

    #[test]
    fn zero_duration_range_keeps_one_pixel() {
        let placement = context(100.0).place_item(
            Some(at(10, 5, 0)),
            Some(TimeDelta::zero()),
            ItemSize::new(50.0, 10.0),
        );
        assert_eq!(placement.geometry().expect("visible").width, 1.0);
    }

    #[test]
    fn out_of_range_items_are_parked() {
        let before = context(100.0).place_item(Some(at(9, 59, 0)), None, ItemSize::default());
        let after = context(100.0).place_item(Some(at(10, 10, 1)), None, ItemSize::default());
        assert_eq!(before, Placement::OffCanvas);
        assert_eq!(after, Placement::OffCanvas);
    }

    #[test]
    fn undated_item_anchors_at_line_start() {
        let placement = context(100.0).place_item(None, None, ItemSize::new(1.0, 10.0));
        assert_eq!(placement.geometry().expect("visible").anchor_x, 0.0);
    }

    #[test]
    fn unsized_content_anchors_at_line_start() {
        let placement = context(0.0).place_item(Some(at(10, 5, 0)), None, ItemSize::new(1.0, 10.0));
        assert_eq!(placement.geometry().expect("visible").anchor_x, 0.0);
    }

    #[test]
    fn current_date_marker_respects_start_bound() {
        let ctx = context(100.0);
        let start = at(10, 0, 30);
        assert_eq!(ctx.place_current_date(at(10, 0, 10), start), Placement::OffCanvas);
        let marker = ctx
            .place_current_date(at(10, 5, 0), start)
            .geometry()
            .expect("visible");
        assert_eq!(marker.left, 50.0);
        assert_eq!(marker.top, -5.0);
        assert_eq!(marker.width, 3.0);
    }
}
