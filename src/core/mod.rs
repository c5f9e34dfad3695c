pub mod dates;
pub mod extent;
pub mod graduations;
pub mod placement;
pub mod time_unit;
pub mod types;

pub use dates::{LineRange, ceiling_date, floor_date};
pub use extent::{Extent, MAX_CANVAS_SIZE, compute_extent};
pub use graduations::{
    Baseline, GraduationInput, GraduationPlan, TickKind, TickMark, compute_graduations,
};
pub use placement::{ItemGeometry, ItemShape, ItemSize, Placement, PlacementContext};
pub use time_unit::{MIN_UNIT_MINUTES, min_time_unit, minutes_to_delta, total_minutes};
pub use types::{LabelMetrics, LayoutMetrics, ScrollViewport};
