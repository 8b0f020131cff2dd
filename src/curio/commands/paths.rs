use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult, PathOverview};
use crate::error::{CurioError, Result};
use crate::marks::MarkSet;
use crate::progress::path_progress;
use crate::store::StateStore;

/// Every learning path with its completion numbers.
pub fn overview<S: StateStore>(catalog: &Catalog, progress: &MarkSet<S>) -> Result<CmdResult> {
    if catalog.paths().is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("This catalog has no learning paths."));
        return Ok(result);
    }

    let overviews = catalog
        .paths()
        .iter()
        .map(|path| {
            let valid = catalog.valid_path_ids(path);
            PathOverview {
                path: path.clone(),
                progress: path_progress(&valid, progress.ids()),
            }
        })
        .collect();
    Ok(CmdResult::default().with_paths(overviews))
}

/// One path's resources in curated order, with its progress header.
pub fn resources<S: StateStore>(
    catalog: &Catalog,
    path_id: &str,
    bookmarks: &MarkSet<S>,
    progress: &MarkSet<S>,
) -> Result<CmdResult> {
    let path = catalog
        .path(path_id)
        .ok_or_else(|| CurioError::UnknownPath(path_id.to_string()))?;

    let valid = catalog.valid_path_ids(path);
    let listed: Vec<_> = valid
        .iter()
        .filter_map(|id| catalog.get(id))
        .cloned()
        .collect();

    let header = PathOverview {
        path: path.clone(),
        progress: path_progress(&valid, progress.ids()),
    };
    Ok(CmdResult::default()
        .with_paths(vec![header])
        .with_listed(helpers::views(listed, bookmarks, progress)))
}
