use crate::error::TimelineResult;
use crate::render::{RectRole, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so invalid geometry is caught before a
/// real backend draws it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_tick_count: usize,
    pub last_item_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_tick_count = frame.rects_with_role(RectRole::TickMark).count();
        self.last_item_count = frame.rects_with_role(RectRole::Item).count();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
