use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::marks::MarkSet;
use crate::store::StateStore;

/// Toggle bookmark state for each id.
pub fn toggle_bookmarks<S: StateStore>(
    catalog: &Catalog,
    set: &mut MarkSet<S>,
    ids: &[String],
) -> Result<CmdResult> {
    toggle_each(catalog, set, ids, "Bookmarked", "Removed bookmark")
}

/// Toggle completion state for each id.
pub fn toggle_completed<S: StateStore>(
    catalog: &Catalog,
    set: &mut MarkSet<S>,
    ids: &[String],
) -> Result<CmdResult> {
    toggle_each(catalog, set, ids, "Marked done", "Marked not done")
}

fn toggle_each<S: StateStore>(
    catalog: &Catalog,
    set: &mut MarkSet<S>,
    ids: &[String],
    on_add: &str,
    on_remove: &str,
) -> Result<CmdResult> {
    // Resolve every id before the first toggle so a typo changes nothing.
    let mut titles = Vec::with_capacity(ids.len());
    for id in ids {
        let resource = catalog
            .get(id)
            .ok_or_else(|| CurioError::UnknownResource(id.clone()))?;
        titles.push(resource.title.clone());
    }

    let mut result = CmdResult::default();
    for (id, title) in ids.iter().zip(titles) {
        let verb = if set.toggle(id) { on_add } else { on_remove };
        result.add_message(CmdMessage::success(format!("{} ({}): {}", verb, id, title)));
    }
    Ok(result)
}
