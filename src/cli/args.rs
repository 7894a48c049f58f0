use crate::navigation::Direction;
use crate::preferences::ThemeMode;
use crate::wallpaper::SortMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artscapes")]
#[command(version)]
#[command(about = "Browse a curated gallery of wallpapers and collections")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Catalog file (JSON or TOML) to use instead of the built-in gallery
    #[arg(short, long, global = true)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List wallpapers, optionally filtered by tags (any tag matches)
    List {
        /// Tag to filter by (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// dateAdded_desc, dateAdded_asc, title_asc or title_desc
        #[arg(short, long)]
        sort: Option<SortMode>,
    },
    /// Show full details of a wallpaper
    Show {
        /// Wallpaper id
        id: String,
    },
    /// Print the wallpaper before or after another one, wrapping around
    Navigate {
        /// Currently selected wallpaper id
        id: String,

        /// prev or next
        #[arg(short, long, default_value_t = Direction::Next)]
        direction: Direction,

        /// Tag filter for the home listing (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Sort order for the home listing
        #[arg(short, long)]
        sort: Option<SortMode>,

        /// Navigate within a collection instead of the home listing
        #[arg(long, conflicts_with_all = ["in_tag", "tags", "sort"])]
        collection: Option<String>,

        /// Navigate within one tag instead of the home listing
        #[arg(long, conflicts_with_all = ["tags", "sort"])]
        in_tag: Option<String>,
    },
    /// Show a random wallpaper
    Random,
    /// Validate the catalog and report dangling references
    Check,
    /// Browse tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Browse curated collections
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },
    /// Read or change the light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum TagAction {
    /// List all tags with wallpaper counts
    List {
        /// Group tags A-Z, with '#' for the rest
        #[arg(short, long)]
        grouped: bool,
    },
    /// Show wallpapers with a specific tag (case-insensitive)
    Show {
        /// Tag to filter by
        tag: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum CollectionAction {
    /// List collections sorted by name
    List {
        /// Tag to filter by (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Show a collection and its wallpapers
    Show {
        /// Collection slug
        slug: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme
    Set {
        /// light or dark
        mode: ThemeMode,
    },
    /// Switch between light and dark
    Toggle,
}
