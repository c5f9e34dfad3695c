mod axis_ticks;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod invalidation;
mod item_controller;
mod items;
mod label_cache;
mod label_controller;
mod label_formatter;
mod layout_coordinator;
mod range_controller;
mod render_frame_builder;
mod render_style;
mod text_measure;
mod time_unit_controller;
mod timeline_layout;
mod timeline_model;
mod timeline_presentation;
mod timeline_runtime;
mod validation;
mod viewport_controller;

pub use axis_ticks::{AxisTick, Graduations};
pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use engine_snapshot::{ItemSnapshot, LayoutSnapshot};
pub use interaction_controller::FlyoutRequest;
pub use invalidation::{InvalidationTopic, InvalidationTopics, PendingItems};
pub use items::{
    DefaultItemVisualSelector, ItemId, ItemStore, ItemVisualKind, ItemVisualSelector,
    TimelineItem,
};
pub use label_cache::DateLabelCacheStats;
pub use label_formatter::{DEFAULT_DATE_FORMAT, validate_date_format};
pub use render_style::TimelineStyle;
pub use text_measure::{EstimatedTextMeasurer, TextMeasurer, estimate_label_text_width_px};
