//! Sort orders for resource lists.
//!
//! Every order is a total, stable arrangement: ties keep their catalog
//! order, so repeated sorts of the same input give identical output.

use crate::model::Resource;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rank given to resources without a difficulty so they sort after
/// everything rated.
const UNRATED_DIFFICULTY_RANK: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order, untouched.
    #[default]
    Default,
    /// Highest rating first. Unrated counts as 0 and sinks to the bottom.
    Rating,
    /// Easiest first. Unrated difficulty sorts last.
    Difficulty,
    /// Provider name, case-insensitive.
    Provider,
    /// Title, case-insensitive.
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::Rating,
        SortKey::Difficulty,
        SortKey::Provider,
        SortKey::Title,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Rating => "rating",
            SortKey::Difficulty => "difficulty",
            SortKey::Provider => "provider",
            SortKey::Title => "title",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        // "alphabetical" is the historical name for the title order
        if needle == "alphabetical" {
            return Ok(SortKey::Title);
        }
        SortKey::ALL
            .into_iter()
            .find(|k| k.slug() == needle)
            .ok_or_else(|| format!("Unknown sort order: {}", s))
    }
}

/// Return `resources` arranged by `key`. The input is left untouched.
pub fn apply(resources: &[Resource], key: SortKey) -> Vec<Resource> {
    let mut sorted = resources.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::Rating => sorted.sort_by(|a, b| {
            rating_of(b)
                .partial_cmp(&rating_of(a))
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Difficulty => {
            sorted.sort_by(|a, b| difficulty_rank(a).cmp(&difficulty_rank(b)))
        }
        SortKey::Provider => {
            sorted.sort_by(|a, b| a.provider.to_lowercase().cmp(&b.provider.to_lowercase()))
        }
        SortKey::Title => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
    sorted
}

fn rating_of(resource: &Resource) -> f32 {
    resource.rating.unwrap_or(0.0)
}

fn difficulty_rank(resource: &Resource) -> u8 {
    resource
        .difficulty
        .map(|d| d.rank())
        .unwrap_or(UNRATED_DIFFICULTY_RANK)
}
