// src/pipeline/check.rs

//! Batch fetch-and-classify driver.

use chrono::NaiveDateTime;
use futures::stream::{self, StreamExt};

use crate::models::{AffairList, Report, RunConfig};
use crate::pipeline::ReportAggregator;
use crate::services::{AffairSource, RecencyClassifier};

/// Fetch every affair in `list` and aggregate the results.
///
/// Fetches run with bounded concurrency (`source.max_concurrent`), but
/// results are consumed in list order, so the report does not depend on
/// arrival order. A failing affair never affects the others.
pub async fn run_check(
    config: &RunConfig,
    source: &AffairSource,
    list: &AffairList,
    now: NaiveDateTime,
) -> Report {
    let concurrency = config.source.max_concurrent.max(1);
    let mut aggregator = ReportAggregator::new(RecencyClassifier::new(now, config.window_days));

    log::info!(
        "Checking {} affairs ({:?}, {} concurrent, window {} days)",
        list.len(),
        source.mode(),
        concurrency,
        config.window_days
    );

    let mut results = stream::iter(list.iter())
        .map(|id| async move { (id, source.fetch(id).await) })
        .buffered(concurrency);

    while let Some((id, result)) = results.next().await {
        let placement = aggregator.add(id, result);
        log::debug!("{} -> {:?}", id, placement);
    }

    aggregator.finish()
}
