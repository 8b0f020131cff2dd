use crate::catalog::CatalogStats;
use crate::config::CurioConfig;
use crate::model::{LearningPath, Resource};
use crate::progress::PathProgress;

pub mod config;
pub mod featured;
pub mod helpers;
pub mod list;
pub mod marks;
pub mod paths;
pub mod stats;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A resource paired with the user's marks on it.
#[derive(Debug, Clone)]
pub struct ResourceView {
    pub resource: Resource,
    pub bookmarked: bool,
    pub completed: bool,
}

/// A learning path with its resolved size and completion numbers.
#[derive(Debug, Clone)]
pub struct PathOverview {
    pub path: LearningPath,
    pub progress: PathProgress,
}

/// Catalog-wide numbers for the stats command.
#[derive(Debug, Clone, Copy)]
pub struct StatsReport {
    pub catalog: CatalogStats,
    pub bookmarks: usize,
    pub completed: usize,
    pub percent: u32,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ResourceView>,
    /// Rows cut off by the list limit, still matching.
    pub hidden: usize,
    pub paths: Vec<PathOverview>,
    pub stats: Option<StatsReport>,
    pub config: Option<CurioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ResourceView>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_hidden(mut self, hidden: usize) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathOverview>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_stats(mut self, stats: StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: CurioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
