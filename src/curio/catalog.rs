//! The fixed resource collection and everything derived from it.
//!
//! A [`Catalog`] is loaded once (from the bundled dataset or a JSON file)
//! and never mutated afterwards. Aggregates that depend only on catalog
//! contents, like per-category counts, are computed at load time.

use crate::error::{CurioError, Result};
use crate::model::{Category, LearningPath, Resource};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

const BUNDLED_JSON: &str = include_str!("data/catalog.json");

static BUNDLED: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_json(BUNDLED_JSON).expect("bundled catalog is valid"));

/// Raw file shape for a catalog dataset.
#[derive(Debug, Deserialize)]
struct CatalogData {
    resources: Vec<Resource>,
    #[serde(default)]
    learning_paths: Vec<LearningPath>,
}

/// Number of resources per category, with the overall total.
///
/// Counts cover the whole catalog, never a filtered view, so the category
/// picker can show stable numbers while filters change.
#[derive(Debug, Clone)]
pub struct CategoryCounts {
    total: usize,
    by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    fn tally(resources: &[Resource]) -> Self {
        let mut by_category = BTreeMap::new();
        for resource in resources {
            *by_category.entry(resource.category).or_insert(0) += 1;
        }
        Self {
            total: resources.len(),
            by_category,
        }
    }

    /// Count for one category, or the overall total for `None`.
    pub fn get(&self, category: Option<Category>) -> usize {
        match category {
            None => self.total,
            Some(c) => self.by_category.get(&c).copied().unwrap_or(0),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// All categories in canonical order with their counts, including
    /// categories the catalog has no resources for.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(Some(c))))
    }
}

/// Headline numbers about the catalog itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub resources: usize,
    pub free: usize,
    pub categories: usize,
    pub providers: usize,
}

/// An immutable resource collection with its learning paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: Vec<Resource>,
    by_id: HashMap<String, usize>,
    paths: Vec<LearningPath>,
    counts: CategoryCounts,
}

impl Catalog {
    /// Build a catalog from its parts.
    ///
    /// Resource ids must be unique; duplicate ids are a dataset bug and
    /// fail the whole load rather than shadowing each other.
    pub fn new(resources: Vec<Resource>, paths: Vec<LearningPath>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(resources.len());
        for (pos, resource) in resources.iter().enumerate() {
            if by_id.insert(resource.id.clone(), pos).is_some() {
                return Err(CurioError::Catalog(format!(
                    "duplicate resource id: {}",
                    resource.id
                )));
            }
        }

        let counts = CategoryCounts::tally(&resources);
        Ok(Self {
            resources,
            by_id,
            paths,
            counts,
        })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.resources, data.learning_paths)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// All resources in catalog order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.by_id.get(id).map(|&pos| &self.resources[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn paths(&self) -> &[LearningPath] {
        &self.paths
    }

    pub fn path(&self, id: &str) -> Option<&LearningPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// The ids of `path` that exist in this catalog, in path order.
    ///
    /// Curated paths go stale when the dataset moves on; ids that no
    /// longer resolve are dropped here and never reported as errors.
    pub fn valid_path_ids(&self, path: &LearningPath) -> Vec<String> {
        path.resource_ids
            .iter()
            .filter(|id| self.contains(id))
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|r| r.featured)
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn stats(&self) -> CatalogStats {
        let providers: HashSet<&str> = self.resources.iter().map(|r| r.provider.as_str()).collect();
        let categories: HashSet<Category> = self.resources.iter().map(|r| r.category).collect();
        CatalogStats {
            resources: self.resources.len(),
            free: self.resources.iter().filter(|r| r.free).count(),
            categories: categories.len(),
            providers: providers.len(),
        }
    }
}
