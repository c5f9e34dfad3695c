use crate::error::TimelineResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::invalidation::PendingInvalidation;
use super::label_formatter::DateLabelFormatter;
use super::timeline_layout::TimelineLayoutState;
use super::timeline_model::TimelineModel;
use super::timeline_presentation::TimelinePresentationState;
use super::timeline_runtime::TimelineRuntimeState;
use super::validation::validate_config;
use super::{
    DefaultItemVisualSelector, EstimatedTextMeasurer, ItemVisualSelector, TextMeasurer,
    TimelineConfig, TimelineEngine,
};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates a fully laid out engine with the estimated text measurer and
    /// the default item visuals.
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        Self::with_collaborators(
            renderer,
            config,
            EstimatedTextMeasurer,
            DefaultItemVisualSelector,
        )
    }

    /// Creates an engine with host-provided label measurement and item visuals.
    pub fn with_collaborators(
        renderer: R,
        config: TimelineConfig,
        measurer: impl TextMeasurer + 'static,
        visual_selector: impl ItemVisualSelector + 'static,
    ) -> TimelineResult<Self> {
        validate_config(&config)?;
        let formatter = DateLabelFormatter::new(&config.date_format)?;

        let mut engine = Self {
            renderer,
            core: EngineCore {
                model: TimelineModel {
                    viewport: config.viewport,
                    start_date: config.start_date,
                    end_date: config.end_date,
                    current_date: config.current_date,
                    preferred_unit: config.time_unit(),
                    ..TimelineModel::default()
                },
                presentation: TimelinePresentationState {
                    formatter,
                    measurer: Box::new(measurer),
                    visual_selector: Box::new(visual_selector),
                    label_font_size_px: config.label_font_size_px,
                    metrics: config.layout_metrics,
                    style: config.style,
                },
                layout: TimelineLayoutState::default(),
                runtime: TimelineRuntimeState {
                    pending_invalidation: PendingInvalidation::with_all_topics(),
                    zoom_enabled: config.is_zoom_enabled,
                    zoom_behavior: config.zoom_behavior,
                    wheel_scroll_step_px: config.wheel_scroll_step_px,
                    flyout_enabled: config.flyout_enabled,
                },
            },
        };
        engine.relayout_all();
        Ok(engine)
    }
}
