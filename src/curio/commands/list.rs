use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterCriteria};
use crate::marks::MarkSet;
use crate::sort::{self, SortKey};
use crate::store::StateStore;

/// Filter, sort and cut the catalog down to one screen of results.
///
/// `limit` caps the rows returned; 0 means no cap. Rows cut off are
/// reported through `CmdResult::hidden` so the caller can say how many
/// more there are.
pub fn run<S: StateStore>(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    order: SortKey,
    bookmarks: &MarkSet<S>,
    progress: &MarkSet<S>,
    limit: usize,
) -> Result<CmdResult> {
    let matching = filter::apply(catalog.resources(), criteria, bookmarks.ids());
    let mut sorted = sort::apply(&matching, order);
    let total = sorted.len();

    if total == 0 {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No resources match the current filters."));
        if !criteria.is_neutral() {
            result.add_message(CmdMessage::info(
                "Try clearing a filter, or run `curio list` with no flags.",
            ));
        }
        return Ok(result);
    }

    let shown = if limit > 0 && total > limit {
        limit
    } else {
        total
    };
    sorted.truncate(shown);

    Ok(CmdResult::default()
        .with_listed(helpers::views(sorted, bookmarks, progress))
        .with_hidden(total - shown))
}
