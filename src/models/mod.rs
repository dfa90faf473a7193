// src/models/mod.rs

//! Domain models for the affair tracker.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod affair;
mod config;
mod report;

// Re-export all public types
pub use affair::{AffairId, AffairRecord, AffairState, Consultation, Draft, Resolution};
pub use config::{
    CacheConfig, Config, LoggingConfig, ReportConfig, RunConfig, SourceConfig, SourceMode,
};
pub use report::{
    CacheWarning, Comparison, DoneEntry, FetchFailure, Report, ReportEntry, StatusLine,
};

/// An ordered, duplicate-free list of affairs in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffairList {
    ids: Vec<AffairId>,
}

impl AffairList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless already present. Returns whether the id was added.
    pub fn push(&mut self, id: AffairId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &AffairId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AffairId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a AffairList {
    type Item = &'a AffairId;
    type IntoIter = std::slice::Iter<'a, AffairId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
