// src/pipeline/load.rs

//! Affair list loading.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{AffairId, AffairList};
use crate::services::IdentifierNormalizer;

/// A loaded list plus the lines that were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub list: AffairList,
    /// Lines matching neither identifier form, as read
    pub invalid: Vec<String>,
    /// Identifiers seen more than once, one entry per repeat
    pub duplicates: Vec<AffairId>,
}

/// Normalize and deduplicate lines into an `AffairList`.
///
/// Lines are trimmed; blank lines are skipped silently. Invalid and
/// duplicate lines are logged and skipped.
pub fn load_lines<I, S>(normalizer: &IdentifierNormalizer, lines: I) -> LoadOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = LoadOutcome::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let id = match normalizer.normalize(line) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("{}", e);
                outcome.invalid.push(line.to_string());
                continue;
            }
        };

        if outcome.list.contains(&id) {
            log::warn!("{}", AppError::DuplicateIdentifier(id.to_string()));
            outcome.duplicates.push(id);
        } else {
            outcome.list.push(id);
        }
    }

    outcome
}

/// Read a list file (one identifier per line) and load it.
pub fn load_list_file(normalizer: &IdentifierNormalizer, path: &Path) -> Result<LoadOutcome> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::list_file(path, e))?;
    let outcome = load_lines(normalizer, content.lines());
    log::debug!(
        "Loaded {} affairs from {} ({} invalid, {} duplicate)",
        outcome.list.len(),
        path.display(),
        outcome.invalid.len(),
        outcome.duplicates.len()
    );
    Ok(outcome)
}
