use serde::{Deserialize, Serialize};

use crate::error::TimelineResult;
use crate::render::Color;

/// Colors of the built-in axis and item visuals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyle {
    pub foreground: Color,
    pub point_item_fill: Color,
    pub range_item_fill: Color,
    pub current_date_fill: Color,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            point_item_fill: Color::GREEN,
            range_item_fill: Color::GREEN.with_alpha(f64::from(0x99_u8) / 255.0),
            current_date_fill: Color::DARK_ORANGE,
        }
    }
}

impl TimelineStyle {
    pub fn validate(self) -> TimelineResult<Self> {
        self.foreground.validate()?;
        self.point_item_fill.validate()?;
        self.range_item_fill.validate()?;
        self.current_date_fill.validate()?;
        Ok(self)
    }
}
