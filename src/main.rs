//! video-gallery - a video gallery in your terminal
//!
//! Browse and search a catalog, play videos in an external player, and pick
//! up again from your recently watched list.

use clap::Parser;
use colored::Colorize;
use log::{debug, warn};

use video_gallery::core::catalog::load_catalog;
use video_gallery::core::controller::GalleryController;
use video_gallery::core::player;
use video_gallery::storage::config;
use video_gallery::storage::history::HistoryStore;
use video_gallery::storage::persistence::FileStore;
use video_gallery::types::{Config, MenuItem, PlayOptions, Screen};
use video_gallery::ui::dialoguer_selector::prompt_text;
use video_gallery::ui::render;
use video_gallery::ui::selector::{Selector, create_selector};
use video_gallery::utils::paths::{ensure_app_dirs, get_catalog_path, get_store_dir};

/// A video gallery in your terminal.
#[derive(Parser, Debug)]
#[command(name = "video-gallery")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Initial search query
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Start in the watch history
    #[arg(long)]
    history: bool,

    /// Clear the watch history and exit
    #[arg(long)]
    clear_history: bool,

    /// Remove one video from the watch history and exit
    #[arg(long, value_name = "ID")]
    remove: Option<String>,

    /// Print the (filtered) catalog and exit
    #[arg(long)]
    list: bool,

    /// Catalog JSON file (overrides config)
    #[arg(long, value_name = "PATH")]
    catalog: Option<String>,

    /// Select videos without starting the player
    #[arg(long)]
    no_play: bool,

    /// Edit the configuration file
    #[arg(short, long)]
    edit: bool,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,
}

/// Everything the user can ask for from the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Watch(String),
    Search,
    ClearSearch,
    History,
    WatchLater,
    Back,
    Home,
    Play,
    ToggleLike(String),
    ToggleWatchLater(String),
    RemoveFromHistory(String),
    ClearHistory,
    Quit,
}

type Gallery = GalleryController<FileStore>;

fn init_logging(level: u8) {
    let log_level = match level {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn play_options(cfg: &Config) -> PlayOptions {
    PlayOptions {
        muted: cfg.start_muted,
        fullscreen: cfg.fullscreen,
        start_at: None,
    }
}

/// Main menu for the current snapshot
fn main_menu(gallery: &Gallery) -> Vec<MenuItem<Action>> {
    let snap = gallery.snapshot();
    let mut items = Vec::new();

    if let Some(video) = snap.selected {
        let like = if video.is_liked { "💔 Unlike" } else { "❤️  Like" };
        let later = if video.is_watch_later {
            "⏱  Remove from watch later"
        } else {
            "⏱  Watch later"
        };
        items.push(MenuItem { label: "▶️  Play".into(), value: Action::Play });
        items.push(MenuItem { label: like.into(), value: Action::ToggleLike(video.id.clone()) });
        items.push(MenuItem { label: later.into(), value: Action::ToggleWatchLater(video.id.clone()) });
        items.push(MenuItem { label: "⬅️  Back".into(), value: Action::Back });
    }

    items.push(MenuItem { label: "🔍 Search".into(), value: Action::Search });
    if !snap.query.is_empty() {
        items.push(MenuItem { label: "✖️  Clear search".into(), value: Action::ClearSearch });
    }
    items.push(MenuItem {
        label: format!("📜 History ({})", snap.history.len()),
        value: Action::History,
    });
    items.push(MenuItem { label: "⏱  Watch later list".into(), value: Action::WatchLater });
    if snap.screen != Screen::Browsing {
        items.push(MenuItem { label: "🏠 Home".into(), value: Action::Home });
    }
    items.push(MenuItem { label: "🚪 Quit".into(), value: Action::Quit });

    items.extend(snap.grid.iter().map(|v| MenuItem {
        label: render::video_label(v),
        value: Action::Watch(v.id.clone()),
    }));

    items
}

/// History menu: pick an entry to watch, remove entries, or clear everything
fn history_menu(gallery: &Gallery) -> Vec<MenuItem<Action>> {
    let entries = gallery.snapshot().history;
    let mut items: Vec<MenuItem<Action>> = entries
        .iter()
        .map(|e| MenuItem {
            label: render::history_label(e),
            value: Action::Watch(e.video.id.clone()),
        })
        .collect();

    items.extend(entries.iter().map(|e| MenuItem {
        label: format!("🗑  Remove \"{}\"", e.video.title),
        value: Action::RemoveFromHistory(e.video.id.clone()),
    }));
    if !entries.is_empty() {
        items.push(MenuItem { label: "🧹 Clear all history".into(), value: Action::ClearHistory });
    }
    items
}

fn watch_later_menu(gallery: &Gallery) -> Vec<MenuItem<Action>> {
    gallery
        .view()
        .watch_later()
        .into_iter()
        .map(|v| MenuItem {
            label: render::video_label(v),
            value: Action::Watch(v.id.clone()),
        })
        .collect()
}

async fn play_selected(gallery: &Gallery, cfg: &Config, cli: &Cli) {
    let Some(video) = gallery.selected_video() else {
        return;
    };
    if cli.no_play {
        println!("{} {}", "Video URL:".green(), video.video_url);
        return;
    }

    println!("{} {}", "Playing:".dimmed(), video.title);
    if let Err(e) = player::play(cfg.player, &video.video_url, &play_options(cfg)).await {
        eprintln!("{} {}", "Error:".red(), e);
    }
}

/// Apply one menu action. Returns false once the user quits.
async fn dispatch(
    action: Action,
    gallery: &mut Gallery,
    selector: &Selector,
    cfg: &Config,
    cli: &Cli,
) -> bool {
    debug!("Action {:?}", action);

    match action {
        Action::Watch(id) => {
            if gallery.select_video_by_id(&id) {
                if let Some(video) = gallery.selected_video() {
                    println!("\n{}\n", render::video_details(video));
                }
                play_selected(gallery, cfg, cli).await;
            }
        }
        Action::Play => play_selected(gallery, cfg, cli).await,
        Action::Search => {
            let current = gallery.snapshot().query.to_string();
            if let Some(query) = prompt_text("Search videos", &current) {
                gallery.set_query(&query);
                let snap = gallery.snapshot();
                if snap.filtered.is_empty() {
                    println!("{}", render::no_results(snap.query).yellow());
                }
            }
        }
        Action::ClearSearch => gallery.set_query(""),
        Action::History => {
            let items = history_menu(gallery);
            if items.is_empty() {
                println!("{}", "No history yet.".yellow());
            } else if let Some(next) = selector.select(&items, "History", None) {
                return Box::pin(dispatch(next, gallery, selector, cfg, cli)).await;
            }
        }
        Action::WatchLater => {
            let items = watch_later_menu(gallery);
            if items.is_empty() {
                println!("{}", "Nothing saved for later.".yellow());
            } else if let Some(next) = selector.select(&items, "Watch later", None) {
                return Box::pin(dispatch(next, gallery, selector, cfg, cli)).await;
            }
        }
        Action::Back => gallery.go_back(),
        Action::Home => gallery.go_home(),
        Action::ToggleLike(id) => {
            gallery.toggle_like(&id);
        }
        Action::ToggleWatchLater(id) => {
            gallery.toggle_watch_later(&id);
        }
        Action::RemoveFromHistory(id) => {
            gallery.remove_from_history(&id);
        }
        Action::ClearHistory => {
            gallery.clear_history();
            println!("{}", "History cleared.".green());
        }
        Action::Quit => return false,
    }

    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log);

    ensure_app_dirs().await?;

    if cli.edit {
        let cfg = config::load_config().await?;
        config::edit_config(&cfg.editor).await?;
        return Ok(());
    }

    let cfg = config::load_config().await.unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    let store = FileStore::new(get_store_dir());
    let history = HistoryStore::with_options(store, cfg.history_key.clone(), cfg.max_history_entries);

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| get_catalog_path(&cfg.catalog_path));
    let catalog = load_catalog(&catalog_path).await?;

    let mut gallery = GalleryController::new(catalog, history);

    if cli.clear_history {
        gallery.clear_history();
        println!("{}", "History cleared.".green());
        return Ok(());
    }

    if let Some(id) = &cli.remove {
        if gallery.remove_from_history(id) {
            println!("{} {}", "Removed from history:".green(), id);
        } else {
            println!("{} {}", "Not in history:".yellow(), id);
        }
        return Ok(());
    }

    gallery.set_query(&cli.query.join(" "));

    if cli.list {
        let snap = gallery.snapshot();
        if snap.filtered.is_empty() {
            println!("{}", render::no_results(snap.query).yellow());
        }
        for video in snap.filtered {
            println!("{}\t{}", video.id, render::video_label(video));
        }
        return Ok(());
    }

    let selector = create_selector(cfg.selector);
    let mut running = true;

    if cli.history {
        running = dispatch(Action::History, &mut gallery, &selector, &cfg, &cli).await;
    }

    while running {
        let header = render::status_line(&gallery.snapshot());
        let items = main_menu(&gallery);

        running = match selector.select(&items, "Gallery", Some(&header)) {
            Some(action) => dispatch(action, &mut gallery, &selector, &cfg, &cli).await,
            None => false,
        };
    }

    Ok(())
}
