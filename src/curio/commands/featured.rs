use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marks::MarkSet;
use crate::store::StateStore;

/// The hand-picked highlights, in catalog order.
pub fn run<S: StateStore>(
    catalog: &Catalog,
    bookmarks: &MarkSet<S>,
    progress: &MarkSet<S>,
) -> Result<CmdResult> {
    let featured = catalog.featured();
    if featured.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("This catalog has no featured resources."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_listed(helpers::views(featured, bookmarks, progress)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::{BOOKMARKS_KEY, PROGRESS_KEY};
    use crate::model::{Category, Resource, ResourceKind};
    use crate::store::memory::InMemoryStore;

    fn res(id: &str, featured: bool) -> Resource {
        Resource {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            url: String::new(),
            provider: String::new(),
            category: Category::WebDev,
            kind: ResourceKind::Website,
            tags: Vec::new(),
            free: true,
            difficulty: None,
            rating: None,
            featured,
        }
    }

    #[test]
    fn returns_featured_resources_only() {
        let catalog =
            Catalog::new(vec![res("a", false), res("b", true), res("c", true)], Vec::new())
                .unwrap();
        let bookmarks = MarkSet::open(InMemoryStore::new(), BOOKMARKS_KEY);
        let progress = MarkSet::open(InMemoryStore::new(), PROGRESS_KEY);

        let result = run(&catalog, &bookmarks, &progress).unwrap();
        let ids: Vec<&str> = result.listed.iter().map(|v| v.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn explains_when_nothing_is_featured() {
        let catalog = Catalog::new(vec![res("a", false)], Vec::new()).unwrap();
        let bookmarks = MarkSet::open(InMemoryStore::new(), BOOKMARKS_KEY);
        let progress = MarkSet::open(InMemoryStore::new(), PROGRESS_KEY);

        let result = run(&catalog, &bookmarks, &progress).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
