//! timeline-rs: headless axis layout engine for date timelines.
//!
//! The crate turns a date range, a preferred time unit and a set of dated
//! items into an axis extent, labelled graduations and item geometry. Hosts
//! feed viewport and pointer events to [`TimelineEngine`] and draw the
//! resulting [`render::RenderFrame`] with their own [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
