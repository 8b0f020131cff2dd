//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for catalog operations, regardless of the UI in
//! front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the loaded catalog and both mark sets
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: it returns data structures, not strings
//!
//! ## Generic Over StateStore
//!
//! `CurioApi<S: StateStore>` is generic over the storage backend:
//! - Production: `CurioApi<FileStore>`
//! - Testing: `CurioApi<InMemoryStore>`
//!
//! This enables exercising the whole stack without touching the
//! filesystem.

use crate::catalog::{Catalog, CategoryCounts};
use crate::commands;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::marks::{MarkSet, BOOKMARKS_KEY, PROGRESS_KEY};
use crate::sort::SortKey;
use crate::store::StateStore;

/// The main API facade for catalog operations.
///
/// Opens both mark sets from their canonical store slots and keeps them
/// for the lifetime of the session. All UI clients should go through
/// this type.
pub struct CurioApi<S: StateStore> {
    catalog: Catalog,
    bookmarks: MarkSet<S>,
    progress: MarkSet<S>,
}

impl<S: StateStore> CurioApi<S> {
    pub fn open(catalog: Catalog, bookmark_store: S, progress_store: S) -> Self {
        Self {
            catalog,
            bookmarks: MarkSet::open(bookmark_store, BOOKMARKS_KEY),
            progress: MarkSet::open(progress_store, PROGRESS_KEY),
        }
    }

    pub fn list(
        &self,
        criteria: &FilterCriteria,
        order: SortKey,
        limit: usize,
    ) -> Result<commands::CmdResult> {
        commands::list::run(
            &self.catalog,
            criteria,
            order,
            &self.bookmarks,
            &self.progress,
            limit,
        )
    }

    pub fn featured(&self) -> Result<commands::CmdResult> {
        commands::featured::run(&self.catalog, &self.bookmarks, &self.progress)
    }

    pub fn toggle_bookmarks(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::marks::toggle_bookmarks(&self.catalog, &mut self.bookmarks, ids)
    }

    pub fn toggle_completed(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::marks::toggle_completed(&self.catalog, &mut self.progress, ids)
    }

    pub fn path_overviews(&self) -> Result<commands::CmdResult> {
        commands::paths::overview(&self.catalog, &self.progress)
    }

    pub fn path_resources(&self, path_id: &str) -> Result<commands::CmdResult> {
        commands::paths::resources(&self.catalog, path_id, &self.bookmarks, &self.progress)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog, &self.bookmarks, &self.progress)
    }

    pub fn category_counts(&self) -> &CategoryCounts {
        self.catalog.counts()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bookmarks(&self) -> &MarkSet<S> {
        &self.bookmarks
    }

    pub fn progress(&self) -> &MarkSet<S> {
        &self.progress
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, MessageLevel, PathOverview, ResourceView, StatsReport,
};
