use crate::commands::ResourceView;
use crate::marks::MarkSet;
use crate::model::Resource;
use crate::store::StateStore;

/// Pair each resource with the user's marks on it.
pub fn views<S: StateStore>(
    resources: Vec<Resource>,
    bookmarks: &MarkSet<S>,
    progress: &MarkSet<S>,
) -> Vec<ResourceView> {
    resources
        .into_iter()
        .map(|resource| ResourceView {
            bookmarked: bookmarks.contains(&resource.id),
            completed: progress.contains(&resource.id),
            resource,
        })
        .collect()
}
