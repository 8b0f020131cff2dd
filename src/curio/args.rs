use clap::{Parser, Subcommand};
use curio::model::{Category, Difficulty, ResourceKind};
use curio::sort::SortKey;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.0" for releases, "0.4.0@abc1234 2026-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "curio", bin_name = "curio", version = get_version())]
#[command(about = "A curated tech-learning catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load the catalog from a JSON file instead of the bundled dataset
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory for bookmarks, progress and config (default: platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources, narrowed by any combination of filters
    #[command(alias = "ls")]
    List {
        /// Match a term against title, description, provider and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only one category (e.g. ai, web, devops)
        #[arg(short, long)]
        category: Option<Category>,

        /// Only one resource type (e.g. course, github, youtube)
        #[arg(short = 't', long = "type")]
        kind: Option<ResourceKind>,

        /// Only one difficulty (beginner, intermediate, advanced)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Only free resources
        #[arg(long)]
        free: bool,

        /// Only bookmarked resources
        #[arg(short, long)]
        bookmarked: bool,

        /// Restrict to one learning path's resources
        #[arg(short, long, value_name = "PATH_ID")]
        path: Option<String>,

        /// Sort order: default, rating, difficulty, provider, title
        #[arg(long)]
        sort: Option<SortKey>,

        /// Rows to show before cutting off (0 = all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search resources (shorthand for list --search)
    Search {
        term: String,

        /// Sort order: default, rating, difficulty, provider, title
        #[arg(long)]
        sort: Option<SortKey>,

        /// Rows to show before cutting off (0 = all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the hand-picked featured resources
    Featured,

    /// Toggle bookmarks for one or more resource ids
    #[command(alias = "b")]
    Bookmark {
        /// Resource ids (e.g. ai-1 web-2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Toggle completion for one or more resource ids
    #[command(alias = "d")]
    Done {
        /// Resource ids (e.g. ai-1 web-2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List learning paths with completion progress
    Paths,

    /// Show one learning path's resources in order
    Path {
        /// Learning path id (e.g. ml-engineer)
        id: String,
    },

    /// Resource counts per category
    Counts,

    /// Catalog totals and your progress
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (list_limit, default_sort, data_file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
