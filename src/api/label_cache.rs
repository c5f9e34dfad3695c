use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Runtime metrics exposed by the in-engine date-label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateLabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Default)]
pub(super) struct DateLabelCache {
    entries: HashMap<NaiveDateTime, String>,
    hits: u64,
    misses: u64,
}

impl DateLabelCache {
    const MAX_ENTRIES: usize = 8192;

    pub(super) fn get(&mut self, key: NaiveDateTime) -> Option<String> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: NaiveDateTime, value: String) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> DateLabelCacheStats {
        DateLabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
