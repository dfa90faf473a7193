// src/pipeline/report.rs

//! Report aggregation.
//!
//! Records are fed in fetch order; each one lands in exactly one bucket:
//! updated, done, failed, or discarded.

use crate::error::{AppError, Result};
use crate::models::{
    AffairId, AffairRecord, CacheWarning, DoneEntry, FetchFailure, Report, ReportEntry,
    StatusLine,
};
use crate::services::{FetchedAffair, RecencyClassifier, extract_status};

/// Where a record was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Updated,
    Done,
    Discarded,
    Failed,
}

/// Accumulates per-affair outcomes into a `Report`.
#[derive(Debug)]
pub struct ReportAggregator {
    classifier: RecencyClassifier,
    report: Report,
}

impl ReportAggregator {
    pub fn new(classifier: RecencyClassifier) -> Self {
        Self {
            report: Report {
                window_days: classifier.window_days(),
                ..Report::default()
            },
            classifier,
        }
    }

    /// Feed the outcome of one fetch.
    pub fn add(&mut self, id: &AffairId, result: Result<FetchedAffair>) -> Placement {
        match result {
            Ok(fetched) => {
                if let Some(e) = fetched.cache_error {
                    log::debug!("{}: {}", id, e);
                    self.report.cache_warnings.push(CacheWarning {
                        id: id.clone(),
                        message: e.to_string(),
                    });
                }
                self.add_record(id, &fetched.record)
            }
            Err(e) => self.add_failure(id, e),
        }
    }

    /// Classify one successfully fetched record.
    pub fn add_record(&mut self, id: &AffairId, record: &AffairRecord) -> Placement {
        let updated = match self.classifier.parse_updated(record, id.as_str()) {
            Ok(updated) => updated,
            Err(e) => return self.add_failure(id, e),
        };

        let status_text = extract_status(record);
        self.report.statuses.push(StatusLine {
            short_id: record.short_id.clone(),
            status_text: status_text.clone(),
        });

        if self.classifier.is_recent(updated) {
            self.report.updated.push(ReportEntry {
                short_id: record.short_id.clone(),
                title: record.title.clone(),
                updated_date: updated.format("%Y-%m-%d").to_string(),
                status_text,
            });
            Placement::Updated
        } else if record.is_done() {
            self.report.done.push(DoneEntry {
                short_id: record.short_id.clone(),
                title: record.title.clone(),
            });
            Placement::Done
        } else {
            Placement::Discarded
        }
    }

    /// Record a per-affair failure.
    pub fn add_failure(&mut self, id: &AffairId, error: AppError) -> Placement {
        log::debug!("{}: {}", id, error);
        self.report.failures.push(FetchFailure {
            id: id.clone(),
            message: error.to_string(),
        });
        Placement::Failed
    }

    /// Sort the updated set by date and return the report.
    pub fn finish(mut self) -> Report {
        // `sort_by` is stable: equal dates keep fetch order.
        self.report
            .updated
            .sort_by(|a, b| a.updated_date.cmp(&b.updated_date));
        self.report
    }
}
