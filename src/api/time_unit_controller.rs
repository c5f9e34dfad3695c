use chrono::TimeDelta;
use tracing::{debug, warn};

use crate::core::{Extent, min_time_unit, total_minutes};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::validate_time_unit;
use super::{Graduations, InvalidationTopic, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Preferred unit requested by the host or by zoom gestures.
    #[must_use]
    pub fn time_unit(&self) -> Option<TimeDelta> {
        self.core.model.preferred_unit
    }

    /// Sets the preferred unit; `None` lets graduations derive it from the width.
    pub fn set_time_unit(&mut self, unit: Option<TimeDelta>) -> TimelineResult<()> {
        let unit = match validate_time_unit(unit) {
            Ok(unit) => unit,
            Err(err) => {
                warn!(error = %err, "rejected time unit");
                return Err(err);
            }
        };
        debug!(unit_minutes = ?unit.map(total_minutes), "set time unit");
        self.core.model.preferred_unit = unit;
        self.update_extent_and_graduations();
        self.invalidate(InvalidationTopic::Extent);
        self.invalidate(InvalidationTopic::Items);
        Ok(())
    }

    /// Unit used by the latest graduation pass.
    #[must_use]
    pub fn actual_time_unit(&self) -> TimeDelta {
        self.core.layout.actual_unit
    }

    #[must_use]
    pub fn min_time_unit(&self) -> TimeDelta {
        min_time_unit()
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        self.core.layout.extent
    }

    /// Whether the preferred unit was dropped because it overflowed the canvas.
    #[must_use]
    pub fn invalid_time_unit(&self) -> bool {
        self.core.layout.extent.invalidates_time_unit()
    }

    /// Ticks and labels of the latest graduation pass.
    #[must_use]
    pub fn graduations(&self) -> &Graduations {
        &self.core.layout.graduations
    }
}
