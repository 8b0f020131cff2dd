//! Composable filtering over the catalog.
//!
//! All criteria combine with AND: a resource must pass every active
//! predicate to stay in the result. An empty [`FilterCriteria`] passes
//! everything, so the unfiltered list is just a filter with no criteria.

use crate::model::{Category, Difficulty, Resource, ResourceKind};
use std::collections::BTreeSet;

/// One immutable filter configuration.
///
/// Built with the `with_*` methods, consumed by [`apply`]. Narrowing a
/// view means building a new value, never mutating a shared one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title, description,
    /// provider and tags. Empty means no text filter.
    pub search: String,
    pub category: Option<Category>,
    pub kind: Option<ResourceKind>,
    pub difficulty: Option<Difficulty>,
    pub free_only: bool,
    pub bookmarked_only: bool,
    /// When set, only resources whose id appears here pass. Used for
    /// learning-path views.
    pub path_ids: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_kind(mut self, kind: Option<ResourceKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_free_only(mut self, on: bool) -> Self {
        self.free_only = on;
        self
    }

    pub fn with_bookmarked_only(mut self, on: bool) -> Self {
        self.bookmarked_only = on;
        self
    }

    /// Restrict to a learning path. Entering a path view drops the
    /// attribute filters in the same step; the search term and the
    /// bookmark toggle carry over.
    pub fn for_path(self, ids: Vec<String>) -> Self {
        Self {
            search: self.search,
            category: None,
            kind: None,
            difficulty: None,
            free_only: false,
            bookmarked_only: self.bookmarked_only,
            path_ids: Some(ids),
        }
    }

    /// True when no criterion is active and the full catalog passes.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.kind.is_none()
            && self.difficulty.is_none()
            && !self.free_only
            && !self.bookmarked_only
            && self.path_ids.is_none()
    }

    pub fn matches(&self, resource: &Resource, bookmarked: &BTreeSet<String>) -> bool {
        self.matches_search(resource)
            && self.category.map_or(true, |c| resource.category == c)
            && self.kind.map_or(true, |k| resource.kind == k)
            // A resource without a difficulty only shows up when the
            // difficulty filter is off.
            && self.difficulty.map_or(true, |d| resource.difficulty == Some(d))
            && (!self.free_only || resource.free)
            && (!self.bookmarked_only || bookmarked.contains(&resource.id))
            && self
                .path_ids
                .as_ref()
                .map_or(true, |ids| ids.iter().any(|id| *id == resource.id))
    }

    fn matches_search(&self, resource: &Resource) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        resource.title.to_lowercase().contains(&needle)
            || resource.description.to_lowercase().contains(&needle)
            || resource.provider.to_lowercase().contains(&needle)
            || resource
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Run `criteria` over `resources`, preserving input order.
pub fn apply(
    resources: &[Resource],
    criteria: &FilterCriteria,
    bookmarked: &BTreeSet<String>,
) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| criteria.matches(r, bookmarked))
        .cloned()
        .collect()
}

/// How many attribute filters are active: category, type, difficulty and
/// free-only. The search box and the bookmark toggle are surfaced
/// elsewhere in the UI and do not count.
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    [
        criteria.category.is_some(),
        criteria.kind.is_some(),
        criteria.difficulty.is_some(),
        criteria.free_only,
    ]
    .iter()
    .filter(|&&on| on)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(id: &str, title: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            url: String::new(),
            provider: "Provider".to_string(),
            category: Category::Ai,
            kind: ResourceKind::Course,
            tags: Vec::new(),
            free: false,
            difficulty: None,
            rating: None,
            featured: false,
        }
    }

    fn no_marks() -> BTreeSet<String> {
        BTreeSet::new()
    }

    #[test]
    fn neutral_criteria_pass_everything() {
        let resources = vec![res("a", "Alpha"), res("b", "Beta")];
        let criteria = FilterCriteria::new();

        assert!(criteria.is_neutral());
        let out = apply(&resources, &criteria, &no_marks());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_tags() {
        let mut k8s = res("devops-2", "Kubernetes the Hard Way");
        k8s.tags = vec!["Kubernetes".to_string(), "Infrastructure".to_string()];
        let mut docker = res("devops-1", "Docker Getting Started");
        docker.tags = vec!["Docker".to_string()];
        let resources = vec![k8s, docker];

        let criteria = FilterCriteria::new().with_search("kubernetes");
        let out = apply(&resources, &criteria, &no_marks());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "devops-2");
    }

    #[test]
    fn search_covers_provider_and_description() {
        let mut a = res("a", "Alpha");
        a.provider = "Coursera".to_string();
        let mut b = res("b", "Beta");
        b.description = "A coursera-style class".to_string();
        let c = res("c", "Gamma");
        let resources = vec![a, b, c];

        let criteria = FilterCriteria::new().with_search("COURSERA");
        let out = apply(&resources, &criteria, &no_marks());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn category_and_kind_narrow_the_list() {
        let mut a = res("a", "Alpha");
        a.category = Category::WebDev;
        a.kind = ResourceKind::Github;
        let b = res("b", "Beta");
        let resources = vec![a, b];

        let by_category =
            FilterCriteria::new().with_category(Some(Category::WebDev));
        assert_eq!(apply(&resources, &by_category, &no_marks()).len(), 1);

        let by_kind = FilterCriteria::new().with_kind(Some(ResourceKind::Github));
        let out = apply(&resources, &by_kind, &no_marks());
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn unrated_difficulty_only_passes_with_filter_off() {
        let mut rated = res("a", "Alpha");
        rated.difficulty = Some(Difficulty::Beginner);
        let unrated = res("b", "Beta");
        let resources = vec![rated, unrated];

        let all = FilterCriteria::new();
        assert_eq!(apply(&resources, &all, &no_marks()).len(), 2);

        let beginners =
            FilterCriteria::new().with_difficulty(Some(Difficulty::Beginner));
        let out = apply(&resources, &beginners, &no_marks());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");

        // The unrated resource never matches a concrete difficulty.
        let advanced =
            FilterCriteria::new().with_difficulty(Some(Difficulty::Advanced));
        assert!(apply(&resources, &advanced, &no_marks()).is_empty());
    }

    #[test]
    fn free_only_excludes_paid_resources() {
        let mut free = res("a", "Alpha");
        free.free = true;
        let paid = res("b", "Beta");
        let resources = vec![free, paid];

        let criteria = FilterCriteria::new().with_free_only(true);
        let out = apply(&resources, &criteria, &no_marks());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn bookmarked_only_consults_the_mark_set() {
        let resources = vec![res("a", "Alpha"), res("b", "Beta")];
        let marks: BTreeSet<String> = ["b".to_string()].into();

        let criteria = FilterCriteria::new().with_bookmarked_only(true);
        let out = apply(&resources, &criteria, &marks);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");

        // with the toggle off, the set is irrelevant
        let neutral = FilterCriteria::new();
        assert_eq!(apply(&resources, &neutral, &marks).len(), 2);
    }

    #[test]
    fn path_restriction_keeps_catalog_order() {
        let resources = vec![res("a", "Alpha"), res("b", "Beta"), res("c", "Gamma")];
        let criteria =
            FilterCriteria::new().for_path(vec!["c".to_string(), "a".to_string()]);

        let out = apply(&resources, &criteria, &no_marks());
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn entering_a_path_drops_attribute_filters_but_keeps_search() {
        let criteria = FilterCriteria::new()
            .with_search("rust")
            .with_category(Some(Category::Cloud))
            .with_kind(Some(ResourceKind::Course))
            .with_difficulty(Some(Difficulty::Advanced))
            .with_free_only(true)
            .with_bookmarked_only(true)
            .for_path(vec!["a".to_string()]);

        assert_eq!(criteria.search, "rust");
        assert!(criteria.bookmarked_only);
        assert!(criteria.category.is_none());
        assert!(criteria.kind.is_none());
        assert!(criteria.difficulty.is_none());
        assert!(!criteria.free_only);
        assert_eq!(criteria.path_ids, Some(vec!["a".to_string()]));
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut a = res("a", "Alpha");
        a.free = true;
        a.category = Category::WebDev;
        let mut b = res("b", "Beta");
        b.free = true;
        let mut c = res("c", "Gamma");
        c.category = Category::WebDev;
        let resources = vec![a, b, c];

        let criteria = FilterCriteria::new()
            .with_category(Some(Category::WebDev))
            .with_free_only(true);
        let out = apply(&resources, &criteria, &no_marks());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn active_filter_count_skips_search_and_bookmarks() {
        let criteria = FilterCriteria::new()
            .with_search("rust")
            .with_bookmarked_only(true);
        assert_eq!(active_filter_count(&criteria), 0);

        let criteria = FilterCriteria::new()
            .with_category(Some(Category::Ai))
            .with_kind(Some(ResourceKind::Github))
            .with_difficulty(Some(Difficulty::Beginner))
            .with_free_only(true);
        assert_eq!(active_filter_count(&criteria), 4);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let mut a = res("a", "Alpha");
        a.free = true;
        let resources = vec![a, res("b", "Beta")];

        let criteria = FilterCriteria::new().with_free_only(true);
        let once = apply(&resources, &criteria, &no_marks());
        let twice = apply(&once, &criteria, &no_marks());

        let ids_once: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let ids_twice: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids_once, ids_twice);
    }
}
