use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::{RectPrimitive, RectRole, TextPrimitive};

/// Size of the surface a frame is drawn on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Backend-agnostic scene for one timeline draw pass, in viewport coordinates.
///
/// Primitives are stored in paint order: axis first, then items, then the
/// current-date marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub size: FrameSize,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.size.width.is_finite()
            || !self.size.height.is_finite()
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(TimelineError::InvalidViewport {
                width: self.size.width,
                height: self.size.height,
            });
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }

    pub fn rects_with_role(&self, role: RectRole) -> impl Iterator<Item = &RectPrimitive> {
        self.rects.iter().filter(move |rect| rect.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameSize, RenderFrame};
    use crate::render::{Color, RectPrimitive, RectRole};

    #[test]
    fn negative_surface_is_rejected() {
        let frame = RenderFrame::new(FrameSize::new(-1.0, 10.0));
        assert!(frame.validate().is_err());
    }

    #[test]
    fn role_filter_selects_matching_rects() {
        let frame = RenderFrame::new(FrameSize::new(100.0, 40.0))
            .with_rect(RectPrimitive::new(0.0, 0.0, 1.0, 10.0, Color::BLACK, RectRole::TickMark))
            .with_rect(RectPrimitive::new(5.0, 2.0, 6.0, 6.0, Color::GREEN, RectRole::Item));
        assert_eq!(frame.rects_with_role(RectRole::Item).count(), 1);
        assert!(frame.validate().is_ok());
    }
}
