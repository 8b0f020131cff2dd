//! Completion aggregates derived from the progress mark set.

use std::collections::BTreeSet;

/// Completion state of one learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Integer percentage of `done` out of `total`, rounded half-up.
/// An empty denominator reads as 0%, never a division error.
pub fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}

/// Progress across `valid_ids`, the path ids that resolve in the catalog.
///
/// Only those ids count toward the denominator, so a path whose dataset
/// entries have churned still reports sane numbers. Completed ids outside
/// the path are ignored.
pub fn path_progress(valid_ids: &[String], completed: &BTreeSet<String>) -> PathProgress {
    let done = valid_ids
        .iter()
        .filter(|id| completed.contains(id.as_str()))
        .count();
    PathProgress {
        completed: done,
        total: valid_ids.len(),
        percent: percent(done, valid_ids.len()),
    }
}
