// src/pipeline/track.rs

//! Full tracking run: load lists, compare, fetch, aggregate.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::models::{Comparison, Report, RunConfig};
use crate::pipeline::{LoadOutcome, compare_lists, load_list_file, run_check};
use crate::services::{AffairSource, IdentifierNormalizer};
use crate::storage::AffairCache;

/// Everything a run produced, for the caller to render.
#[derive(Debug)]
pub struct TrackOutcome {
    pub primary: LoadOutcome,
    /// `None` when no comparison list was given or it could not be read
    pub comparison: Option<Comparison>,
    /// `None` for dry runs
    pub report: Option<Report>,
}

/// Run the tracker.
///
/// Only an unreadable primary list is fatal. A comparison list that cannot
/// be read disables the comparison; per-affair failures end up in the report.
/// With `ignore_done`, the report carries no done affairs.
pub async fn run_tracker(
    config: &RunConfig,
    primary_path: &Path,
    compare_path: Option<&Path>,
    cache: Arc<dyn AffairCache>,
    now: NaiveDateTime,
) -> Result<TrackOutcome> {
    let normalizer = IdentifierNormalizer::new()?;

    let primary = load_list_file(&normalizer, primary_path)?;
    log::info!("{} affairs loaded", primary.list.len());

    let comparison = match compare_path {
        Some(path) => match load_list_file(&normalizer, path) {
            Ok(other) => Some(compare_lists(&primary.list, &other.list)),
            Err(e) => {
                log::warn!("{}. Comparison skipped.", e);
                None
            }
        },
        None => None,
    };

    if config.dry_run {
        log::info!("Dry run: affairs are not checked against the service");
        return Ok(TrackOutcome {
            primary,
            comparison,
            report: None,
        });
    }

    let source = AffairSource::new(config, cache)?;
    let mut report = run_check(config, &source, &primary.list, now).await;
    if config.ignore_done {
        report.done.clear();
    }

    Ok(TrackOutcome {
        primary,
        comparison,
        report: Some(report),
    })
}
