use super::{
    timeline_layout::TimelineLayoutState, timeline_model::TimelineModel,
    timeline_presentation::TimelinePresentationState, timeline_runtime::TimelineRuntimeState,
};

/// Internal engine core state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore {
    pub(super) model: TimelineModel,
    pub(super) presentation: TimelinePresentationState,
    pub(super) layout: TimelineLayoutState,
    pub(super) runtime: TimelineRuntimeState,
}
