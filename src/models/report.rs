// src/models/report.rs

//! Report structures produced by a tracking run.

use serde::Serialize;

use crate::models::AffairId;

/// An affair updated within the recency window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub short_id: String,
    pub title: String,
    /// Date part of the last update, `YYYY-MM-DD`
    pub updated_date: String,
    pub status_text: String,
}

/// A concluded affair that was not updated recently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoneEntry {
    pub short_id: String,
    pub title: String,
}

/// Latest status of one fetched affair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub short_id: String,
    pub status_text: String,
}

/// An affair that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub id: AffairId,
    pub message: String,
}

/// A record that was fetched but could not be cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheWarning {
    pub id: AffairId,
    pub message: String,
}

/// Final output of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Sorted ascending by `updated_date`, ties in fetch order
    pub updated: Vec<ReportEntry>,
    /// Fetch order
    pub done: Vec<DoneEntry>,
    /// Every successfully evaluated affair, fetch order
    pub statuses: Vec<StatusLine>,
    pub failures: Vec<FetchFailure>,
    pub cache_warnings: Vec<CacheWarning>,
    /// Recency window the report was built with
    pub window_days: i64,
}

impl Report {
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn done_count(&self) -> usize {
        self.done.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Identifiers of a comparison list that also occur in the primary list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Comparison list order
    pub matches: Vec<AffairId>,
}

impl Comparison {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}
