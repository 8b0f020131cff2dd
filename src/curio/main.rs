use clap::Parser;
use colored::*;
use curio::api::{
    CmdMessage, ConfigAction, CurioApi, MessageLevel, PathOverview, ResourceView, StatsReport,
};
use curio::catalog::{Catalog, CategoryCounts};
use curio::commands;
use curio::config::CurioConfig;
use curio::error::{CurioError, Result};
use curio::filter::FilterCriteria;
use curio::model::{Category, Difficulty, ResourceKind};
use curio::sort::SortKey;
use curio::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CurioApi<FileStore>,
    config: CurioConfig,
    state_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            category,
            kind,
            difficulty,
            free,
            bookmarked,
            path,
            sort,
            limit,
        }) => handle_list(
            &ctx, search, category, kind, difficulty, free, bookmarked, path, sort, limit,
        ),
        Some(Commands::Search { term, sort, limit }) => handle_list(
            &ctx,
            Some(term),
            None,
            None,
            None,
            false,
            false,
            None,
            sort,
            limit,
        ),
        Some(Commands::Featured) => handle_featured(&ctx),
        Some(Commands::Bookmark { ids }) => handle_bookmark(&mut ctx, ids),
        Some(Commands::Done { ids }) => handle_done(&mut ctx, ids),
        Some(Commands::Paths) => handle_paths(&ctx),
        Some(Commands::Path { id }) => handle_path(&ctx, id),
        Some(Commands::Counts) => handle_counts(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(
            &ctx, None, None, None, None, false, false, None, None, None,
        ),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let state_dir = match &cli.state_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("CURIO_STATE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "curio", "curio")
                .expect("Could not determine a data dir")
                .data_dir()
                .to_path_buf(),
        },
    };

    let config = CurioConfig::load(&state_dir).unwrap_or_default();

    let catalog = match cli.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::bundled().clone(),
    };

    let api = CurioApi::open(
        catalog,
        FileStore::new(&state_dir),
        FileStore::new(&state_dir),
    );

    Ok(AppContext {
        api,
        config,
        state_dir,
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<Category>,
    kind: Option<ResourceKind>,
    difficulty: Option<Difficulty>,
    free: bool,
    bookmarked: bool,
    path: Option<String>,
    sort: Option<SortKey>,
    limit: Option<usize>,
) -> Result<()> {
    let mut criteria = FilterCriteria::new()
        .with_search(search.unwrap_or_default())
        .with_category(category)
        .with_kind(kind)
        .with_difficulty(difficulty)
        .with_free_only(free)
        .with_bookmarked_only(bookmarked);

    if let Some(path_id) = path {
        let path = ctx
            .api
            .catalog()
            .path(&path_id)
            .ok_or_else(|| CurioError::UnknownPath(path_id.clone()))?;
        criteria = criteria.for_path(ctx.api.catalog().valid_path_ids(path));
    }

    let order = sort.unwrap_or(ctx.config.default_sort);
    let limit = limit.unwrap_or(ctx.config.list_limit);

    let result = ctx.api.list(&criteria, order, limit)?;
    print_resources(&result.listed, result.hidden);
    print_messages(&result.messages);
    Ok(())
}

fn handle_featured(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.featured()?;
    print_resources(&result.listed, result.hidden);
    print_messages(&result.messages);
    Ok(())
}

fn handle_bookmark(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_bookmarks(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_completed(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.path_overviews()?;
    print_path_list(&result.paths);
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.path_resources(&id)?;
    if let Some(overview) = result.paths.first() {
        print_path_header(overview);
    }
    print_resources(&result.listed, result.hidden);
    print_messages(&result.messages);
    Ok(())
}

fn handle_counts(ctx: &AppContext) -> Result<()> {
    print_counts(ctx.api.category_counts());
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(report) = &result.stats {
        print_stats(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.state_dir, action)?;
    if let Some(config) = &result.config {
        for key in ["list_limit", "default_sort", "data_file"] {
            if let Some(val) = config.get(key) {
                println!("{} = {}", key, val);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 12;
const RATING_WIDTH: usize = 4;
const PROVIDER_WIDTH: usize = 18;
const ICON_WIDTH: usize = 3;
const BOOKMARK_MARKER: &str = "★";
const DONE_MARKER: &str = "✓";

fn print_resources(views: &[ResourceView], hidden: usize) {
    for view in views {
        let r = &view.resource;

        let icon = r.category.icon();
        let icon_padding = ICON_WIDTH.saturating_sub(icon.width());

        let id_display = truncate_to_width(&r.id, ID_WIDTH);
        let id_padding = ID_WIDTH.saturating_sub(id_display.width());

        let bookmark = if view.bookmarked {
            BOOKMARK_MARKER
        } else {
            " "
        };
        let done = if view.completed { DONE_MARKER } else { " " };

        let rating = match r.rating {
            Some(value) => format!("{:>width$.1}", value, width = RATING_WIDTH),
            None => format!("{:>width$}", "-", width = RATING_WIDTH),
        };

        let provider = truncate_to_width(&r.provider, PROVIDER_WIDTH);
        let provider_padding = PROVIDER_WIDTH.saturating_sub(provider.width());

        // 2 leading spaces, single gaps around the marker pair, rating gap
        let fixed = 2 + ICON_WIDTH + ID_WIDTH + 1 + 2 + 1 + 1 + 1 + 2 + RATING_WIDTH + 2
            + PROVIDER_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&r.title, available);
        let title_padding = available.saturating_sub(title.width());

        let title_colored = if r.featured {
            title.bold()
        } else {
            title.normal()
        };

        println!(
            "  {}{}{}{} {}{}  {} {}  {}  {}{}",
            icon,
            " ".repeat(icon_padding),
            id_display,
            " ".repeat(id_padding),
            title_colored,
            " ".repeat(title_padding),
            bookmark.yellow(),
            done.green(),
            rating,
            " ".repeat(provider_padding),
            provider.dimmed(),
        );
    }

    if hidden > 0 {
        println!(
            "{}",
            format!("  + {} more. Raise --limit, or use --limit 0 for all.", hidden).dimmed()
        );
    }
}

const BAR_CELLS: usize = 10;
const PATH_ID_WIDTH: usize = 16;
const PATH_TITLE_WIDTH: usize = 28;

fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_CELLS) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn print_path_list(overviews: &[PathOverview]) {
    for overview in overviews {
        let path = &overview.path;
        let progress = overview.progress;

        let icon_padding = ICON_WIDTH.saturating_sub(path.icon.width());
        let id_display = truncate_to_width(&path.id, PATH_ID_WIDTH);
        let id_padding = PATH_ID_WIDTH.saturating_sub(id_display.width());
        let title = truncate_to_width(&path.title, PATH_TITLE_WIDTH);
        let title_padding = PATH_TITLE_WIDTH.saturating_sub(title.width());

        let bar = progress_bar(progress.percent);
        let bar_colored = if progress.percent == 100 {
            bar.green()
        } else {
            bar.normal()
        };

        println!(
            "  {}{}{}{} {}{}  {}  {}",
            path.icon,
            " ".repeat(icon_padding),
            id_display,
            " ".repeat(id_padding),
            title,
            " ".repeat(title_padding),
            bar_colored,
            format!("{}/{} ({}%)", progress.completed, progress.total, progress.percent)
                .dimmed(),
        );
    }
}

fn print_path_header(overview: &PathOverview) {
    let path = &overview.path;
    let progress = overview.progress;

    println!("{} {}", path.icon, path.title.bold());
    if !path.description.is_empty() {
        println!("{}", path.description.dimmed());
    }
    println!(
        "{}  {}/{} done ({}%)",
        progress_bar(progress.percent),
        progress.completed,
        progress.total,
        progress.percent
    );
    println!();
}

fn print_counts(counts: &CategoryCounts) {
    let name_width = 24;
    println!("  {}{:<width$} {:>4}", "   ", "All", counts.total(), width = name_width);
    for (category, count) in counts.iter() {
        let icon = category.icon();
        let icon_padding = ICON_WIDTH.saturating_sub(icon.width());
        println!(
            "  {}{}{:<width$} {:>4}",
            icon,
            " ".repeat(icon_padding),
            category.name(),
            count,
            width = name_width
        );
    }
}

fn print_stats(report: &StatsReport) {
    println!("{}", "Catalog".bold());
    println!("  Resources   {:>5}", report.catalog.resources);
    println!("  Free        {:>5}", report.catalog.free);
    println!("  Categories  {:>5}", report.catalog.categories);
    println!("  Providers   {:>5}", report.catalog.providers);
    println!();
    println!("{}", "Your marks".bold());
    println!("  Bookmarked  {:>5}", report.bookmarks);
    println!(
        "  Completed   {:>5} ({}%)",
        report.completed, report.percent
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
