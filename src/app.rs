use crate::catalog::Catalog;
use crate::preferences::{PreferenceStore, ThemeMode};
use crate::query::{ActiveTags, WallpaperQuery};
use crate::ui::theme::GalleryTheme;
use std::sync::mpsc::{self, Receiver};

mod actions;
mod config;
mod filters;
mod navigation;
mod runtime;

pub use config::Config;
pub use runtime::run_tui;

/// Which listing the browser is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every wallpaper, filtered by the active tags and sorted
    Home,
    /// Collection overview, filtered by the same active tags
    Collections,
    /// Members of one collection, by slug
    Collection(String),
    /// Grouped A-Z tag index
    Tags,
    /// Wallpapers carrying one tag
    Tag(String),
}

impl View {
    pub fn title(&self) -> String {
        match self {
            View::Home => "Wallpapers".to_string(),
            View::Collections => "Collections".to_string(),
            View::Collection(slug) => format!("Collection: {}", slug),
            View::Tags => "Tags".to_string(),
            View::Tag(tag) => format!("Tag: {}", tag),
        }
    }

    /// Whether the view lists wallpapers (and so supports the preview popup)
    pub fn lists_wallpapers(&self) -> bool {
        matches!(self, View::Home | View::Collection(_) | View::Tag(_))
    }
}

/// UI-related transient state (popups, messages, palette).
pub struct UiState {
    pub should_quit: bool,
    pub show_help: bool,
    pub show_tag_picker: bool,
    pub tag_picker_idx: usize,
    /// Wallpaper id shown in the preview popup
    pub preview: Option<String>,
    pub status_message: Option<String>,
    /// Palette for the current theme (swapped when the preference changes)
    pub theme: GalleryTheme,
}

impl UiState {
    fn new(mode: ThemeMode) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            show_tag_picker: false,
            tag_picker_idx: 0,
            preview: None,
            status_message: None,
            theme: GalleryTheme::for_mode(mode),
        }
    }
}

/// Filter and sort state shared by the home and collection listings.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: WallpaperQuery,
}

impl FilterState {
    pub fn active_tags(&self) -> &ActiveTags {
        &self.query.active_tags
    }
}

/// Selection state: the caller-owned ids the navigation cursor steps from.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub wallpaper_id: Option<String>,
    pub collection_id: Option<String>,
    pub tag_idx: usize,
}

pub struct App {
    pub catalog: Catalog,
    pub config: Config,
    pub view: View,
    pub ui: UiState,
    pub filters: FilterState,
    pub selection: SelectionState,
    prefs: Box<dyn PreferenceStore>,
    theme_events: Receiver<ThemeMode>,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, mut prefs: Box<dyn PreferenceStore>) -> Self {
        let (tx, theme_events) = mpsc::channel();
        prefs.subscribe(Box::new(move |mode| {
            let _ = tx.send(mode);
        }));

        let filters = FilterState {
            query: WallpaperQuery::new(ActiveTags::new(), config.display.default_sort),
        };

        let mut app = Self {
            catalog,
            config,
            view: View::Home,
            ui: UiState::new(prefs.theme()),
            filters,
            selection: SelectionState::default(),
            prefs,
            theme_events,
        };
        app.reset_selection();
        app
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.prefs.theme()
    }

    /// Apply theme changes published by the preference store.
    ///
    /// Returns true when the palette changed and the screen needs a full redraw.
    pub fn poll_theme_changes(&mut self) -> bool {
        let mut latest = None;
        while let Ok(mode) = self.theme_events.try_recv() {
            latest = Some(mode);
        }
        match latest {
            Some(mode) => {
                self.ui.theme = GalleryTheme::for_mode(mode);
                true
            }
            None => false,
        }
    }
}
