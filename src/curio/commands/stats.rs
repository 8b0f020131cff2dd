use crate::catalog::Catalog;
use crate::commands::{CmdResult, StatsReport};
use crate::error::Result;
use crate::marks::MarkSet;
use crate::progress::percent;
use crate::store::StateStore;

/// Catalog totals plus the user's bookmark and completion counts.
///
/// Mark sets can hold ids from older datasets; only ids that still
/// resolve in the catalog are counted.
pub fn run<S: StateStore>(
    catalog: &Catalog,
    bookmarks: &MarkSet<S>,
    progress: &MarkSet<S>,
) -> Result<CmdResult> {
    let in_catalog = |ids: &MarkSet<S>| ids.ids().iter().filter(|id| catalog.contains(id)).count();

    let completed = in_catalog(progress);
    let report = StatsReport {
        catalog: catalog.stats(),
        bookmarks: in_catalog(bookmarks),
        completed,
        percent: percent(completed, catalog.len()),
    };
    Ok(CmdResult::default().with_stats(report))
}
