use crate::interaction::ZoomBehavior;

use super::invalidation::PendingInvalidation;

/// Runtime switches and the pending repaint accumulator.
#[derive(Debug)]
pub(super) struct TimelineRuntimeState {
    pub(super) pending_invalidation: PendingInvalidation,
    pub(super) zoom_enabled: bool,
    pub(super) zoom_behavior: ZoomBehavior,
    pub(super) wheel_scroll_step_px: f64,
    pub(super) flyout_enabled: bool,
}
