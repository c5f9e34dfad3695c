mod frame;
mod null_renderer;
mod primitives;

pub use frame::{FrameSize, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectPrimitive, RectRole, RectShape, TextPrimitive};

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from axis layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}
