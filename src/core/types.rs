use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Visible window of the horizontal scroller hosting the timeline content.
///
/// `horizontal_offset` is how far the content has been scrolled to the left
/// under the viewport, so the content origin sits at `-horizontal_offset`
/// in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollViewport {
    pub horizontal_offset: f64,
    pub width: f64,
    pub height: f64,
}

impl ScrollViewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            horizontal_offset: 0.0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_horizontal_offset(mut self, horizontal_offset: f64) -> Self {
        self.horizontal_offset = horizontal_offset;
        self
    }

    /// Content origin expressed in viewport coordinates.
    #[must_use]
    pub fn origin_x(self) -> f64 {
        -self.horizontal_offset
    }

    #[must_use]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(TimelineError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.horizontal_offset.is_finite() {
            return Err(TimelineError::InvalidData(
                "viewport horizontal offset must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Fixed geometry of the axis band shared by ticks, labels and items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub tick_width_px: f64,
    pub tick_height_px: f64,
    pub padding_top_px: f64,
    pub current_marker_width_px: f64,
    pub current_marker_height_px: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            tick_width_px: 1.0,
            tick_height_px: 10.0,
            padding_top_px: 0.0,
            current_marker_width_px: 3.0,
            current_marker_height_px: 20.0,
        }
    }
}

impl LayoutMetrics {
    pub fn validate(self) -> TimelineResult<Self> {
        for (value, name) in [
            (self.tick_width_px, "tick_width_px"),
            (self.tick_height_px, "tick_height_px"),
            (self.current_marker_width_px, "current_marker_width_px"),
            (self.current_marker_height_px, "current_marker_height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "layout metric `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.padding_top_px.is_finite() || self.padding_top_px < 0.0 {
            return Err(TimelineError::InvalidData(
                "layout metric `padding_top_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Top coordinate that vertically centers a visual of `height` on the tick band.
    #[must_use]
    pub fn centered_top(self, height: f64) -> f64 {
        (self.tick_height_px - height) / 2.0 + self.padding_top_px
    }
}

/// Width of the widest formatted date label and the spacing derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    pub label_width_px: f64,
}

impl LabelMetrics {
    const CHUNK_LABEL_GAP_PX: f64 = 30.0;
    const MIN_CHUNK_SIZE_PX: f64 = 60.0;
    const SIDE_TOLERANCE_CHUNKS: f64 = 4.0;

    #[must_use]
    pub fn new(label_width_px: f64) -> Self {
        let label_width_px = if label_width_px.is_finite() {
            label_width_px.max(0.0)
        } else {
            0.0
        };
        Self { label_width_px }
    }

    /// Preferred on-screen width of one chunk.
    #[must_use]
    pub fn desired_chunk_size(self) -> f64 {
        (self.label_width_px + Self::CHUNK_LABEL_GAP_PX).max(Self::MIN_CHUNK_SIZE_PX)
    }

    /// Margin laid out beyond each side of the viewport.
    #[must_use]
    pub fn side_tolerance(self) -> f64 {
        self.desired_chunk_size() * Self::SIDE_TOLERANCE_CHUNKS
    }

    #[must_use]
    pub fn label_mid(self) -> f64 {
        self.label_width_px / 2.0
    }
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelMetrics, LayoutMetrics, ScrollViewport};

    #[test]
    fn chunk_size_has_a_sixty_pixel_floor() {
        assert_eq!(LabelMetrics::new(10.0).desired_chunk_size(), 60.0);
        assert_eq!(LabelMetrics::new(45.0).desired_chunk_size(), 75.0);
        assert_eq!(LabelMetrics::new(45.0).side_tolerance(), 300.0);
    }

    #[test]
    fn non_finite_label_width_collapses_to_zero() {
        assert_eq!(LabelMetrics::new(f64::NAN).label_width_px, 0.0);
    }

    #[test]
    fn viewport_origin_moves_left_when_scrolled() {
        let viewport = ScrollViewport::new(400.0, 80.0).with_horizontal_offset(150.0);
        assert_eq!(viewport.origin_x(), -150.0);
    }

    #[test]
    fn viewport_validation_rejects_nan_width() {
        let err = ScrollViewport::new(f64::NAN, 10.0)
            .validate()
            .expect_err("nan must fail");
        assert!(format!("{err}").contains("invalid viewport"));
    }

    #[test]
    fn centered_top_uses_tick_band() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.centered_top(6.0), 2.0);
        assert_eq!(metrics.centered_top(20.0), -5.0);
    }
}
