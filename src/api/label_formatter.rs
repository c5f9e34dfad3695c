use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime};
use chrono::format::{Item, StrftimeItems};

use crate::error::{TimelineError, TimelineResult};

use super::label_cache::{DateLabelCache, DateLabelCacheStats};

pub const DEFAULT_DATE_FORMAT: &str = "%H:%M";

/// Last second of the four-digit-year calendar, used to size the widest label.
pub(super) fn widest_label_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|day| day.and_hms_opt(23, 59, 59))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Rejects format strings chrono cannot render for a naive local date.
pub fn validate_date_format(format: &str) -> TimelineResult<()> {
    if format.is_empty() {
        return Err(TimelineError::InvalidData(
            "date format must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TimelineError::InvalidData(format!(
            "date format `{format}` is not a valid strftime pattern"
        )));
    }
    // Timezone specifiers parse fine but fail when rendered without an offset.
    let mut widest = String::new();
    if write!(widest, "{}", widest_label_date().format(format)).is_err() {
        return Err(TimelineError::InvalidData(format!(
            "date format `{format}` needs data a naive date does not carry"
        )));
    }
    Ok(())
}

/// Formats tick dates with a validated strftime pattern, caching results
/// until the pattern changes.
#[derive(Debug)]
pub(super) struct DateLabelFormatter {
    format: String,
    cache: DateLabelCache,
}

impl DateLabelFormatter {
    pub(super) fn new(format: &str) -> TimelineResult<Self> {
        validate_date_format(format)?;
        Ok(Self {
            format: format.to_owned(),
            cache: DateLabelCache::default(),
        })
    }

    pub(super) fn format_str(&self) -> &str {
        &self.format
    }

    pub(super) fn set_format(&mut self, format: &str) -> TimelineResult<()> {
        validate_date_format(format)?;
        self.format = format.to_owned();
        self.cache.clear();
        Ok(())
    }

    pub(super) fn format(&mut self, date: NaiveDateTime) -> String {
        if let Some(cached) = self.cache.get(date) {
            return cached;
        }
        let mut text = String::new();
        // Validation guarantees rendering succeeds; keep an empty label otherwise.
        if write!(text, "{}", date.format(&self.format)).is_err() {
            text.clear();
        }
        self.cache.insert(date, text.clone());
        text
    }

    pub(super) fn widest_label(&mut self) -> String {
        self.format(widest_label_date())
    }

    pub(super) fn cache_stats(&self) -> DateLabelCacheStats {
        self.cache.stats()
    }
}
